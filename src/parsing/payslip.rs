//! Payslip extraction entry point.
//!
//! A payslip document carries exactly two tables: the itemised line-item
//! table followed by the summary table. Everything else in the page is ignored.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::ParserConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::Payslip;

use super::line_items::parse_line_items;
use super::summary::parse_summary;
use super::table::extract_tables;

/// Number of tables a payslip document must contain.
pub const PAYSLIP_TABLE_COUNT: usize = 2;

/// Parses payslip documents under a fixed configuration.
///
/// The parser holds no mutable state; one instance can be shared across
/// threads and used for any number of documents.
///
/// # Example
///
/// ```
/// use holerite_parser::config::ParserConfig;
/// use holerite_parser::parsing::PayslipParser;
/// use chrono::NaiveDate;
///
/// let parser = PayslipParser::new(ParserConfig::new(
///     NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
/// ));
///
/// let result = parser.parse("<table></table>");
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PayslipParser {
    config: ParserConfig,
}

impl PayslipParser {
    /// Creates a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one HTML payslip.
    ///
    /// # Returns
    ///
    /// Returns the [`Payslip`] stamped with the configured reference date, or an error if:
    /// - The document does not contain exactly two tables (`StructureError`)
    /// - The summary table is too short (`StructureError`)
    /// - A line-item row does not have five cells (`RowShapeError`)
    /// - A line-item row fills both or neither amount cell (`InvalidLineItem`)
    /// - Any number cell is malformed (`ParseError`)
    pub fn parse(&self, html: &str) -> EngineResult<Payslip> {
        let tables = extract_tables(html);

        let [line_item_table, summary_table] = tables.as_slice() else {
            warn!(
                found = tables.len(),
                expected = PAYSLIP_TABLE_COUNT,
                "Unexpected number of tables"
            );
            return Err(EngineError::StructureError {
                message: format!(
                    "expected {} tables, found {}",
                    PAYSLIP_TABLE_COUNT,
                    tables.len()
                ),
            });
        };

        debug!(
            line_item_rows = line_item_table.body_rows().len(),
            summary_rows = summary_table.body_rows().len(),
            "Located payslip tables"
        );

        let line_items = parse_line_items(line_item_table)?;
        debug!(count = line_items.len(), "Extracted line items");

        let summary = parse_summary(summary_table, &self.config.summary)?;

        info!(
            reference_date = %self.config.reference_date,
            line_items = line_items.len(),
            net_pay = %summary.net_pay,
            "Payslip parsed"
        );

        Ok(Payslip {
            reference_date: self.config.reference_date,
            summary,
            line_items,
        })
    }
}

/// Parses one HTML payslip with the default summary layout.
///
/// # Example
///
/// ```
/// use holerite_parser::parsing::parse_payslip;
/// use holerite_parser::error::EngineError;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
/// let result = parse_payslip("<html><body>no tables</body></html>", date);
/// assert!(matches!(result, Err(EngineError::StructureError { .. })));
/// ```
pub fn parse_payslip(html: &str, reference_date: NaiveDate) -> EngineResult<Payslip> {
    PayslipParser::new(ParserConfig::new(reference_date)).parse(html)
}
