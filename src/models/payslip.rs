//! Payslip models.
//!
//! This module contains the [`Payslip`] aggregate, the [`PayslipSummary`] block
//! read from the summary table, and the [`ReconciliationWarning`] produced when
//! the printed totals disagree with the itemised rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// The nine figures printed in the payslip's summary table.
///
/// Field order follows the order in which the figures appear in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipSummary {
    /// Base salary.
    pub base_salary: Decimal,
    /// Social security (INSS) contribution base.
    pub inss_contribution_base: Decimal,
    /// Withheld income tax (IRRF) contribution base, always printed as a whole number.
    pub irrf_contribution_base: i64,
    /// IRRF bracket as printed.
    pub irrf_bracket: Decimal,
    /// FGTS calculation base.
    pub fgts_calculation_base: Decimal,
    /// FGTS deposit for the month.
    pub fgts_amount: Decimal,
    /// Printed total of earnings.
    pub total_earnings: Decimal,
    /// Printed total of deductions.
    pub total_deductions: Decimal,
    /// Printed net pay.
    pub net_pay: Decimal,
}

/// A fully parsed payslip.
///
/// Owns its line items, which keep the row order of the printed document.
///
/// # Example
///
/// ```
/// use holerite_parser::models::{LineItem, Payslip, PayslipSummary};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let payslip = Payslip {
///     reference_date: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
///     summary: PayslipSummary {
///         base_salary: Decimal::new(300000, 2),
///         inss_contribution_base: Decimal::new(300000, 2),
///         irrf_contribution_base: 2700,
///         irrf_bracket: Decimal::new(15, 0),
///         fgts_calculation_base: Decimal::new(300000, 2),
///         fgts_amount: Decimal::new(24000, 2),
///         total_earnings: Decimal::new(300000, 2),
///         total_deductions: Decimal::new(33000, 2),
///         net_pay: Decimal::new(267000, 2),
///     },
///     line_items: vec![
///         LineItem::earning(1, "SALARIO".to_string(), Decimal::new(30, 0), Decimal::new(300000, 2)),
///         LineItem::deduction(501, "INSS".to_string(), Decimal::new(11, 0), Decimal::new(33000, 2)),
///     ],
/// };
/// assert_eq!(payslip.earnings().count(), 1);
/// assert!(payslip.reconcile().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The batch date this payslip was processed under.
    pub reference_date: NaiveDate,
    /// The figures from the summary table.
    #[serde(flatten)]
    pub summary: PayslipSummary,
    /// The itemised rows, in printed order.
    pub line_items: Vec<LineItem>,
}

/// Identifies which printed total a [`ReconciliationWarning`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciledTotal {
    /// The printed total of earnings.
    TotalEarnings,
    /// The printed total of deductions.
    TotalDeductions,
    /// The printed net pay.
    NetPay,
}

/// A mismatch between a printed total and the value computed from line items.
///
/// Warnings never fail a parse; they only flag documents worth a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationWarning {
    /// Which printed total disagrees.
    pub total: ReconciledTotal,
    /// The value printed on the payslip.
    pub printed: Decimal,
    /// The value computed from the line items.
    pub computed: Decimal,
}

impl Payslip {
    /// Iterates over the earning line items in printed order.
    pub fn earnings(&self) -> impl Iterator<Item = &LineItem> {
        self.line_items.iter().filter(|item| item.is_earning())
    }

    /// Iterates over the deduction line items in printed order.
    pub fn deductions(&self) -> impl Iterator<Item = &LineItem> {
        self.line_items.iter().filter(|item| item.is_deduction())
    }

    /// Sum of all earning amounts.
    pub fn itemised_earnings(&self) -> Decimal {
        self.earnings().map(LineItem::amount).sum()
    }

    /// Sum of all deduction amounts, as a non-negative value.
    pub fn itemised_deductions(&self) -> Decimal {
        -self.deductions().map(LineItem::amount).sum::<Decimal>()
    }

    /// Compares the printed totals against the line items.
    ///
    /// Checks the earnings total, the deductions total and that net pay equals
    /// earnings minus deductions. Returns one warning per mismatch, in that order.
    pub fn reconcile(&self) -> Vec<ReconciliationWarning> {
        let earnings = self.itemised_earnings();
        let deductions = self.itemised_deductions();

        [
            (ReconciledTotal::TotalEarnings, self.summary.total_earnings, earnings),
            (
                ReconciledTotal::TotalDeductions,
                self.summary.total_deductions,
                deductions,
            ),
            (ReconciledTotal::NetPay, self.summary.net_pay, earnings - deductions),
        ]
        .into_iter()
        .filter(|(_, printed, computed)| printed != computed)
        .map(|(total, printed, computed)| ReconciliationWarning {
            total,
            printed,
            computed,
        })
        .collect()
    }
}
