//! Error types for the holerite parser.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while extracting a payslip.

use thiserror::Error;

/// The main error type for the holerite parser.
///
/// Every failure aborts the whole parse; there is no partial result.
///
/// # Example
///
/// ```
/// use holerite_parser::error::EngineError;
///
/// let error = EngineError::StructureError {
///     message: "expected 2 tables, found 1".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Unexpected document structure: expected 2 tables, found 1"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A cell's text could not be decoded as a number.
    #[error("Failed to parse '{value}': {message}")]
    ParseError {
        /// The offending cell text.
        value: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// A line-item row did not have the expected number of cells.
    #[error("Line item row {row} has {found} cells, expected {expected}")]
    RowShapeError {
        /// Zero-based index of the row inside the table body.
        row: usize,
        /// The number of cells a line-item row must have.
        expected: usize,
        /// The number of cells actually found.
        found: usize,
    },

    /// A line-item row had the right shape but inconsistent content.
    #[error("Invalid line item in row {row}: {message}")]
    InvalidLineItem {
        /// Zero-based index of the row inside the table body.
        row: usize,
        /// A description of the inconsistency.
        message: String,
    },

    /// The document does not have the table layout of a payslip.
    #[error("Unexpected document structure: {message}")]
    StructureError {
        /// A description of the structural mismatch.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
