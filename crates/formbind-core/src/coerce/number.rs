//! Locale-aware numeric parsing shared by the coercer and the validator.
use crate::normalize::strip_formatting;
use rust_decimal::Decimal;
use std::{num::IntErrorKind, str::FromStr};
use thiserror::Error as ThisError;

///
/// NumberError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum NumberError {
    #[error("not a number")]
    Invalid,

    #[error("number exceeds the bounds of its type")]
    Overflow,
}

///
/// NumberParts
/// Sign and digit runs of a syntactically valid number.
///

struct NumberParts<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
}

impl NumberParts<'_> {
    const fn sign(&self) -> &'static str {
        if self.negative { "-" } else { "" }
    }

    fn integer_or_zero(&self) -> &str {
        if self.integer.is_empty() {
            "0"
        } else {
            self.integer
        }
    }

    /// Rebuild the number with `.` as the separator.
    fn canonical(&self) -> String {
        if self.fraction.is_empty() {
            format!("{}{}", self.sign(), self.integer_or_zero())
        } else {
            format!("{}{}.{}", self.sign(), self.integer_or_zero(), self.fraction)
        }
    }
}

/// Optional sign, digits, one separator. Exponents are not accepted.
fn split_number(text: &str, separator: char) -> Result<NumberParts<'_>, NumberError> {
    let text = text.trim();
    let (negative, digits) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    };

    let (integer, fraction) = digits.split_once(separator).unwrap_or((digits, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
    {
        return Err(NumberError::Invalid);
    }

    Ok(NumberParts {
        negative,
        integer,
        fraction,
    })
}

/// Parse a 32-bit integer. A fractional part is accepted only when it is
/// all zeros; any other fraction counts as overflow of the integer type.
pub fn parse_int(raw: &str, separator: char) -> Result<i32, NumberError> {
    let stripped = strip_formatting(raw, separator);
    let parts = split_number(&stripped, separator)?;

    if parts.fraction.bytes().any(|b| b != b'0') {
        return Err(NumberError::Overflow);
    }

    format!("{}{}", parts.sign(), parts.integer_or_zero())
        .parse::<i32>()
        .map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumberError::Overflow,
            _ => NumberError::Invalid,
        })
}

pub fn parse_decimal(raw: &str, separator: char) -> Result<Decimal, NumberError> {
    let stripped = strip_formatting(raw, separator);
    let parts = split_number(&stripped, separator)?;

    // digits are already validated, so any failure here is range
    Decimal::from_str(&parts.canonical()).map_err(|_| NumberError::Overflow)
}

pub fn parse_float(raw: &str, separator: char) -> Result<f64, NumberError> {
    let stripped = strip_formatting(raw, separator);
    let parts = split_number(&stripped, separator)?;

    let value = parts
        .canonical()
        .parse::<f64>()
        .map_err(|_| NumberError::Invalid)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumberError::Overflow)
    }
}
