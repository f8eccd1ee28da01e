//! Summary table mapping.
//!
//! The summary table has no per-field labels we can rely on; figures are
//! identified by position. All body cells are flattened row by row, the label
//! cells sitting between the two groups of figures (positions `[5, 9)` by
//! default) are dropped, and the first nine remaining cells are, in order:
//!
//! | # | Field                     | Type    |
//! |---|---------------------------|---------|
//! | 0 | base salary               | decimal |
//! | 1 | INSS contribution base    | decimal |
//! | 2 | IRRF contribution base    | integer |
//! | 3 | IRRF bracket              | decimal |
//! | 4 | FGTS calculation base     | decimal |
//! | 5 | FGTS amount               | decimal |
//! | 6 | total earnings            | decimal |
//! | 7 | total deductions          | decimal |
//! | 8 | net pay                   | decimal |

use tracing::{debug, warn};

use crate::config::{SUMMARY_FIELD_COUNT, SummaryLayout};
use crate::error::{EngineError, EngineResult};
use crate::models::PayslipSummary;

use super::locale_decimal::{parse_brl_decimal, parse_integer};
use super::table::HtmlTable;

/// Reads the nine summary figures from the summary table.
///
/// Cells remaining after the nine figures are ignored.
///
/// # Errors
///
/// - `StructureError` if the layout's dropped range ends before it starts
/// - `StructureError` if fewer than nine cells remain once the label cells are dropped
/// - `ParseError` if any of the nine cells is malformed
pub fn parse_summary(table: &HtmlTable, layout: &SummaryLayout) -> EngineResult<PayslipSummary> {
    if !layout.is_valid() {
        return Err(EngineError::StructureError {
            message: format!(
                "summary layout drops positions [{}, {})",
                layout.removed_start, layout.removed_end
            ),
        });
    }

    let cells: Vec<&str> = table.body_cells().collect();
    let remaining = layout.retain(&cells);

    if remaining.len() < SUMMARY_FIELD_COUNT {
        warn!(
            found = cells.len(),
            remaining = remaining.len(),
            "Summary table is too short"
        );
        return Err(EngineError::StructureError {
            message: format!(
                "summary table has {} cells, {} left after dropping positions [{}, {}), expected at least {}",
                cells.len(),
                remaining.len(),
                layout.removed_start,
                layout.removed_end,
                SUMMARY_FIELD_COUNT
            ),
        });
    }

    let fields = &remaining[..SUMMARY_FIELD_COUNT];
    debug!(fields = ?fields, "Summary figures located");

    Ok(PayslipSummary {
        base_salary: parse_brl_decimal(fields[0])?,
        inss_contribution_base: parse_brl_decimal(fields[1])?,
        irrf_contribution_base: parse_integer(fields[2])?,
        irrf_bracket: parse_brl_decimal(fields[3])?,
        fgts_calculation_base: parse_brl_decimal(fields[4])?,
        fgts_amount: parse_brl_decimal(fields[5])?,
        total_earnings: parse_brl_decimal(fields[6])?,
        total_deductions: parse_brl_decimal(fields[7])?,
        net_pay: parse_brl_decimal(fields[8])?,
    })
}
