//! Configuration loading and management for the holerite parser.
//!
//! The configuration names the batch reference date stamped onto parsed
//! payslips and describes where the summary figures sit in the summary table.
//!
//! # Example
//!
//! ```no_run
//! use holerite_parser::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/holerite.yaml").unwrap();
//! println!("Batch date: {}", config.config().reference_date);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_REMOVED_END, DEFAULT_REMOVED_START, ParserConfig, SUMMARY_FIELD_COUNT, SummaryLayout,
};
