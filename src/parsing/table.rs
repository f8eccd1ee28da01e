//! Generic HTML table traversal.
//!
//! Turns an HTML document into plain `table -> rows -> cells` data with no
//! knowledge of payslips. Markup outside `<table>` elements is ignored and the
//! html5ever parser behind `scraper` recovers from malformed documents, so a
//! broken page header cannot break table extraction.

use scraper::{ElementRef, Html};

/// One body row of a table: the trimmed text of each `<td>` in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    cells: Vec<String>,
}

impl TableRow {
    /// Creates a row from already extracted cell texts.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// The cell texts; an empty cell is an empty string.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no `<td>` cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The body of one `<table>` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlTable {
    body_rows: Vec<TableRow>,
}

impl HtmlTable {
    /// Creates a table from already extracted rows.
    pub fn from_rows(body_rows: Vec<TableRow>) -> Self {
        Self { body_rows }
    }

    /// Rows of the table's first `<tbody>`. Header and footer rows are not included.
    pub fn body_rows(&self) -> &[TableRow] {
        &self.body_rows
    }

    /// Every body cell, row by row, left to right.
    pub fn body_cells(&self) -> impl Iterator<Item = &str> {
        self.body_rows
            .iter()
            .flat_map(|row| row.cells().iter().map(String::as_str))
    }
}

/// Extracts every `<table>` of `html` in document order.
///
/// Nested tables are returned as tables of their own, after the table that
/// contains them.
///
/// # Example
///
/// ```
/// use holerite_parser::parsing::extract_tables;
///
/// let tables = extract_tables(
///     "<p>header<table><tr><td> 1 </td><td></td></tr></table>",
/// );
/// assert_eq!(tables.len(), 1);
/// assert_eq!(tables[0].body_rows()[0].cells(), ["1", ""]);
/// ```
pub fn extract_tables(html: &str) -> Vec<HtmlTable> {
    let document = Html::parse_document(html);
    descendants_named(document.root_element(), "table")
        .map(read_table)
        .collect()
}

fn read_table(table: ElementRef<'_>) -> HtmlTable {
    // html5ever wraps bare <tr>s in an implicit <tbody>
    let body_rows = descendants_named(table, "tbody")
        .next()
        .map(|tbody| descendants_named(tbody, "tr").map(read_row).collect())
        .unwrap_or_default();

    HtmlTable::from_rows(body_rows)
}

fn read_row(row: ElementRef<'_>) -> TableRow {
    TableRow::new(
        descendants_named(row, "td")
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect(),
    )
}

/// Element descendants of `element` with the given tag name, excluding `element` itself.
fn descendants_named<'a>(
    element: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(table: &HtmlTable) -> Vec<Vec<&str>> {
        table
            .body_rows()
            .iter()
            .map(|row| row.cells().iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_tables_in_document_order() {
        let html = r#"
            <html><body>
              <table><tbody><tr><td>a</td></tr></tbody></table>
              <div><table><tbody><tr><td>b</td></tr></tbody></table></div>
            </body></html>
        "#;

        let tables = extract_tables(html);
        assert_eq!(tables.len(), 2);
        assert_eq!(cells(&tables[0]), vec![vec!["a"]]);
        assert_eq!(cells(&tables[1]), vec![vec!["b"]]);
    }

    #[test]
    fn test_no_tables() {
        assert!(extract_tables("<p>nothing to see</p>").is_empty());
        assert!(extract_tables("").is_empty());
    }

    #[test]
    fn test_header_rows_outside_body_are_skipped() {
        let html = r#"
            <table>
              <thead><tr><td>Cód.</td><td>Descrição</td></tr></thead>
              <tbody><tr><td>1</td><td>SALARIO</td></tr></tbody>
              <tfoot><tr><td>x</td><td>y</td></tr></tfoot>
            </table>
        "#;

        let tables = extract_tables(html);
        assert_eq!(cells(&tables[0]), vec![vec!["1", "SALARIO"]]);
    }

    #[test]
    fn test_bare_rows_get_implicit_body() {
        let tables = extract_tables("<table><tr><td>1</td><td>2</td></tr></table>");
        assert_eq!(cells(&tables[0]), vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_th_cells_are_not_data_cells() {
        let tables = extract_tables("<table><tr><th>Label</th><td>1</td></tr></table>");
        assert_eq!(cells(&tables[0]), vec![vec!["1"]]);
    }

    #[test]
    fn test_cell_text_is_trimmed_and_entities_decoded() {
        let html = "<table><tr><td>\n  1.500,00&nbsp;</td><td>A &amp; B</td><td>   </td></tr></table>";
        let tables = extract_tables(html);
        assert_eq!(cells(&tables[0]), vec![vec!["1.500,00", "A & B", ""]]);
    }

    #[test]
    fn test_nested_markup_inside_cell_contributes_text() {
        let html = "<table><tr><td><b>SALARIO</b> BASE</td></tr></table>";
        let tables = extract_tables(html);
        assert_eq!(cells(&tables[0]), vec![vec!["SALARIO BASE"]]);
    }

    #[test]
    fn test_malformed_surrounding_markup_is_tolerated() {
        let html = r#"
            <div class="header"><span>Empresa <b>XYZ</div></p></span>
            <table><tr><td>1</td></tr></table>
            <div><<broken
        "#;

        let tables = extract_tables(html);
        assert_eq!(tables.len(), 1);
        assert_eq!(cells(&tables[0]), vec![vec!["1"]]);
    }

    #[test]
    fn test_table_without_body_has_no_rows() {
        let tables = extract_tables("<table><thead><tr><td>h</td></tr></thead></table>");
        assert_eq!(tables.len(), 1);
        assert!(tables[0].body_rows().is_empty());
    }

    #[test]
    fn test_body_cells_flatten_row_major() {
        let html = r#"
            <table><tbody>
              <tr><td>a</td><td>b</td></tr>
              <tr><td>c</td></tr>
              <tr><td>d</td><td>e</td><td>f</td></tr>
            </tbody></table>
        "#;

        let tables = extract_tables(html);
        let flat: Vec<&str> = tables[0].body_cells().collect();
        assert_eq!(flat, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_row_len_and_is_empty() {
        let row = TableRow::new(vec!["1".to_string(), String::new()]);
        assert_eq!(row.len(), 2);
        assert!(!row.is_empty());
        assert!(TableRow::default().is_empty());
    }
}
