//! Line-item table mapping.
//!
//! Each body row of the itemised table has five cells in fixed order:
//! code, description, reference quantity, earnings amount and deduction amount.
//! Exactly one of the two amount cells is filled; which one decides whether
//! the row is an earning or a deduction.

use tracing::{trace, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::LineItem;

use super::locale_decimal::parse_brl_decimal;
use super::table::{HtmlTable, TableRow};

/// Number of cells in a line-item row.
pub const LINE_ITEM_CELLS: usize = 5;

/// Converts every body row of the itemised table into a [`LineItem`], in order.
///
/// # Errors
///
/// Fails on the first row that does not convert; see [`parse_line_item`].
pub fn parse_line_items(table: &HtmlTable) -> EngineResult<Vec<LineItem>> {
    table
        .body_rows()
        .iter()
        .enumerate()
        .map(|(index, row)| parse_line_item(index, row))
        .collect()
}

/// Converts one body row into a [`LineItem`].
///
/// `row_index` is only used for error reporting.
///
/// # Errors
///
/// - `RowShapeError` if the row does not have exactly five cells
/// - `ParseError` if the code is not a positive integer or a number cell is malformed
/// - `InvalidLineItem` if both amount cells, or neither, are filled
///
/// # Example
///
/// ```
/// use holerite_parser::parsing::{TableRow, parse_line_item};
/// use rust_decimal::Decimal;
///
/// let row = TableRow::new(
///     ["501", "INSS", "9,00", "", "270,00"].map(String::from).to_vec(),
/// );
/// let item = parse_line_item(0, &row)?;
/// assert_eq!(item.amount(), Decimal::new(-27000, 2));
/// # Ok::<(), holerite_parser::error::EngineError>(())
/// ```
pub fn parse_line_item(row_index: usize, row: &TableRow) -> EngineResult<LineItem> {
    let [code, description, reference, earning, deduction] = row.cells() else {
        warn!(
            row = row_index,
            cells = row.len(),
            "Line item row has the wrong number of cells"
        );
        return Err(EngineError::RowShapeError {
            row: row_index,
            expected: LINE_ITEM_CELLS,
            found: row.len(),
        });
    };

    let code = parse_code(code)?;
    let description = description.trim().to_string();
    let reference_quantity = parse_brl_decimal(reference)?;

    let item = match (earning.is_empty(), deduction.is_empty()) {
        (false, true) => LineItem::earning(
            code,
            description,
            reference_quantity,
            parse_brl_decimal(earning)?,
        ),
        // Negated after decoding, never by prefixing the text with '-'
        (true, false) => LineItem::deduction(
            code,
            description,
            reference_quantity,
            parse_brl_decimal(deduction)?,
        ),
        (true, true) => {
            return Err(EngineError::InvalidLineItem {
                row: row_index,
                message: "both earnings and deduction cells are empty".to_string(),
            });
        }
        (false, false) => {
            return Err(EngineError::InvalidLineItem {
                row: row_index,
                message: format!(
                    "both earnings ('{}') and deduction ('{}') cells are filled",
                    earning, deduction
                ),
            });
        }
    };

    trace!(
        row = row_index,
        code = item.code,
        amount = %item.amount(),
        "Parsed line item"
    );

    Ok(item)
}

fn parse_code(text: &str) -> EngineResult<u32> {
    let code = text
        .trim()
        .parse::<u32>()
        .map_err(|e| EngineError::ParseError {
            value: text.to_string(),
            message: format!("line item code: {}", e),
        })?;

    if code == 0 {
        return Err(EngineError::ParseError {
            value: text.to_string(),
            message: "line item code must be positive".to_string(),
        });
    }

    Ok(code)
}
