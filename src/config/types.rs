//! Configuration types for payslip parsing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

/// Number of summary figures read from the summary table.
pub const SUMMARY_FIELD_COUNT: usize = 9;

/// Default first flattened position of the label cells dropped from the summary table.
pub const DEFAULT_REMOVED_START: usize = 5;

/// Default end (exclusive) of the label cells dropped from the summary table.
pub const DEFAULT_REMOVED_END: usize = 9;

/// Position of the summary figures within the flattened summary table.
///
/// The summary table interleaves label cells with its figures. Cells at
/// flattened positions `[removed_start, removed_end)` are labels and are
/// dropped; the first nine remaining cells are the figures. With the default
/// `[5, 9)` the figures sit at positions 0-4 and 9-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SummaryLayout {
    /// First flattened position of the dropped label cells.
    #[serde(default = "default_removed_start")]
    pub removed_start: usize,
    /// End (exclusive) of the dropped label cells.
    #[serde(default = "default_removed_end")]
    pub removed_end: usize,
}

fn default_removed_start() -> usize {
    DEFAULT_REMOVED_START
}

fn default_removed_end() -> usize {
    DEFAULT_REMOVED_END
}

impl SummaryLayout {
    /// Returns true if the dropped range is well formed (`removed_start <= removed_end`).
    pub fn is_valid(&self) -> bool {
        self.removed_start <= self.removed_end
    }

    /// Keeps the cells outside the dropped range, in order.
    pub fn retain<'a>(&self, cells: &[&'a str]) -> Vec<&'a str> {
        let removed = self.removed_start..self.removed_end;
        cells
            .iter()
            .enumerate()
            .filter(|(position, _)| !removed.contains(position))
            .map(|(_, cell)| *cell)
            .collect()
    }
}

impl Default for SummaryLayout {
    fn default() -> Self {
        Self {
            removed_start: DEFAULT_REMOVED_START,
            removed_end: DEFAULT_REMOVED_END,
        }
    }
}

/// Parser configuration.
///
/// The reference date has no default: it identifies the batch of documents
/// being processed and is stamped onto every parsed payslip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// The batch date stamped onto every payslip.
    pub reference_date: NaiveDate,
    /// Layout of the summary table.
    #[serde(default)]
    pub summary: SummaryLayout,
}

impl ParserConfig {
    /// Creates a configuration with the default summary layout.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            summary: SummaryLayout::default(),
        }
    }
}
