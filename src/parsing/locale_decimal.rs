//! Brazilian Portuguese numeric decoding.
//!
//! Payslips print numbers the pt-BR way: `.` groups thousands and `,` separates
//! decimals, so `1.234,56` is one thousand two hundred thirty-four and fifty-six
//! cents. Values are decoded into exact [`Decimal`]s, never through floats.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// The pt-BR decimal separator.
pub const DECIMAL_SEPARATOR: char = ',';

/// The pt-BR thousands grouping separator.
pub const GROUP_SEPARATOR: char = '.';

const GROUP_WIDTH: usize = 3;

/// Parses a pt-BR formatted number into an exact decimal.
///
/// Accepts surrounding whitespace, an optional leading `-` or `+`, an integer
/// part with optional thousands grouping, and an optional fraction after `,`.
/// The scale of the result is the number of fraction digits printed.
///
/// # Errors
///
/// Returns `ParseError` for empty text, stray characters, misplaced group
/// separators, more than one decimal separator, or values too large for
/// a `Decimal`.
///
/// # Examples
///
/// ```
/// use holerite_parser::parsing::parse_brl_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_brl_decimal("1.234,56").unwrap(), Decimal::new(123456, 2));
/// assert_eq!(parse_brl_decimal("-10,00").unwrap(), Decimal::new(-1000, 2));
/// assert!(parse_brl_decimal("12,34,5").is_err());
/// ```
pub fn parse_brl_decimal(text: &str) -> EngineResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid(text, "empty value"));
    }

    let (negative, unsigned) = split_sign(trimmed);
    let (integer, fraction) = match unsigned.split_once(DECIMAL_SEPARATOR) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let digits = ungroup(integer).map_err(|message| invalid(text, message))?;

    let mut normalized = String::with_capacity(trimmed.len());
    if negative {
        normalized.push('-');
    }
    normalized.push_str(&digits);

    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(text, "fraction must be one or more digits"));
        }
        normalized.push('.');
        normalized.push_str(fraction);
    }

    Decimal::from_str_exact(&normalized).map_err(|e| invalid(text, &e.to_string()))
}

/// Parses a whole number printed without grouping or decimals.
///
/// # Examples
///
/// ```
/// use holerite_parser::parsing::parse_integer;
///
/// assert_eq!(parse_integer(" 500 ").unwrap(), 500);
/// assert!(parse_integer("500,00").is_err());
/// ```
pub fn parse_integer(text: &str) -> EngineResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|e| invalid(text, &e.to_string()))
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Strips thousands separators, validating that every group after the
/// first has exactly three digits.
fn ungroup(integer: &str) -> Result<String, &'static str> {
    if integer.is_empty() {
        return Err("missing integer digits");
    }

    let mut digits = String::with_capacity(integer.len());
    for (index, group) in integer.split(GROUP_SEPARATOR).enumerate() {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return Err("integer part must be digits with optional '.' grouping");
        }
        let well_formed = if index == 0 {
            group.len() <= GROUP_WIDTH || !integer.contains(GROUP_SEPARATOR)
        } else {
            group.len() == GROUP_WIDTH
        };
        if !well_formed {
            return Err("misplaced thousands separator");
        }
        digits.push_str(group);
    }

    Ok(digits)
}

fn invalid(value: &str, message: &str) -> EngineError {
    EngineError::ParseError {
        value: value.to_string(),
        message: message.to_string(),
    }
}
