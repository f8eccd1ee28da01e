//! Line item model and related types.
//!
//! A line item is one row of the payslip's itemised table: a payroll code,
//! its description, a reference quantity (hours, days, percentage) and either
//! an earning or a deduction amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Distinguishes earnings from deductions and carries the unsigned amount.
///
/// # Example
///
/// ```
/// use holerite_parser::models::LineItemKind;
/// use rust_decimal::Decimal;
///
/// let kind = LineItemKind::Deduction {
///     deduction_amount: Decimal::new(20000, 2),
/// };
/// assert_eq!(kind.signed_amount(), Decimal::new(-20000, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineItemKind {
    /// An amount paid to the employee (printed in the earnings column).
    Earning {
        /// The amount as printed, never negative.
        earning_amount: Decimal,
    },
    /// An amount withheld from the employee (printed in the deductions column).
    Deduction {
        /// The amount as printed, never negative.
        deduction_amount: Decimal,
    },
}

impl LineItemKind {
    /// Returns the amount with its payroll sign: positive for earnings,
    /// negative for deductions.
    pub fn signed_amount(&self) -> Decimal {
        match *self {
            LineItemKind::Earning { earning_amount } => earning_amount,
            LineItemKind::Deduction { deduction_amount } => -deduction_amount,
        }
    }
}

/// A single row of the payslip's itemised table.
///
/// # Example
///
/// ```
/// use holerite_parser::models::LineItem;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let item = LineItem::earning(
///     1,
///     "SALARIO".to_string(),
///     Decimal::from_str("30.00").unwrap(),
///     Decimal::from_str("1500.00").unwrap(),
/// );
/// assert!(item.is_earning());
/// assert_eq!(item.amount(), Decimal::from_str("1500.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The payroll event code, always positive.
    pub code: u32,
    /// The event description as printed.
    pub description: String,
    /// The reference quantity (hours, days or a rate).
    pub reference_quantity: Decimal,
    /// Whether this is an earning or a deduction, with its amount.
    #[serde(flatten)]
    pub kind: LineItemKind,
}

impl LineItem {
    /// Creates an earning line item.
    pub fn earning(
        code: u32,
        description: String,
        reference_quantity: Decimal,
        earning_amount: Decimal,
    ) -> Self {
        Self {
            code,
            description,
            reference_quantity,
            kind: LineItemKind::Earning { earning_amount },
        }
    }

    /// Creates a deduction line item from the unsigned printed amount.
    pub fn deduction(
        code: u32,
        description: String,
        reference_quantity: Decimal,
        deduction_amount: Decimal,
    ) -> Self {
        Self {
            code,
            description,
            reference_quantity,
            kind: LineItemKind::Deduction { deduction_amount },
        }
    }

    /// Returns the signed amount: positive for earnings, negated for deductions.
    pub fn amount(&self) -> Decimal {
        self.kind.signed_amount()
    }

    /// Returns true if the item was printed in the earnings column.
    pub fn is_earning(&self) -> bool {
        matches!(self.kind, LineItemKind::Earning { .. })
    }

    /// Returns true if the item was printed in the deductions column.
    pub fn is_deduction(&self) -> bool {
        matches!(self.kind, LineItemKind::Deduction { .. })
    }
}
