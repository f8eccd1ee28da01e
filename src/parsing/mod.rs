//! Payslip parsing.
//!
//! This module turns an HTML payslip into a [`Payslip`](crate::models::Payslip).
//! It is split into a generic table traversal, a pt-BR number decoder, and
//! the mappings from table cells to line items and summary figures.

mod line_items;
mod locale_decimal;
mod payslip;
mod summary;
mod table;

pub use line_items::{LINE_ITEM_CELLS, parse_line_item, parse_line_items};
pub use locale_decimal::{DECIMAL_SEPARATOR, GROUP_SEPARATOR, parse_brl_decimal, parse_integer};
pub use payslip::{PAYSLIP_TABLE_COUNT, PayslipParser, parse_payslip};
pub use summary::parse_summary;
pub use table::{HtmlTable, TableRow, extract_tables};
