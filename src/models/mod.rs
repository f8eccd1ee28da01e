//! Core data models for the holerite parser.
//!
//! Every record here is an immutable value built once per parse.

mod line_item;
mod payslip;

pub use line_item::{LineItem, LineItemKind};
pub use payslip::{Payslip, PayslipSummary, ReconciledTotal, ReconciliationWarning};
