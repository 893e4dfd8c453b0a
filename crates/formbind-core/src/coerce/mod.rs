//! Per-field coercion of raw strings into typed values.
mod number;


pub use number::{NumberError, parse_decimal, parse_float, parse_int};

use crate::{
    locale::{BindOptions, DateFormat},
    model::{FieldKind, FieldModel},
    normalize::FALSE_TOKEN,
    types::{EntityRef, Money, OptionCode},
    value::Value,
};
use thiserror::Error as ThisError;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, macros::format_description};
use uuid::Uuid;

///
/// ParseError
///
/// A raw value that could not be coerced into its field's kind.
/// Never fatal: the assembler records it as an issue and leaves the field
/// unset.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParseError {
    #[error("'{raw}' is not a valid {kind:?} value: {source}")]
    Number {
        kind: FieldKind,
        raw: String,
        source: NumberError,
    },

    #[error("'{raw}' does not match the expected date format")]
    Date { raw: String },

    #[error("'{raw}' is not a valid identifier")]
    Identifier { raw: String },
}

impl ParseError {
    fn number(kind: FieldKind, raw: &str, source: NumberError) -> Self {
        Self::Number {
            kind,
            raw: raw.to_string(),
            source,
        }
    }
}

///
/// coerce
///
/// Coerce one raw value for `field`.
///
/// Returns `Ok(None)` when the field produces no value at all, which only
/// happens for a reference field without a configured target kind.
///
pub fn coerce(
    field: &FieldModel,
    raw: &str,
    options: &BindOptions,
) -> Result<Option<Value>, ParseError> {
    if field.kind == FieldKind::Reference && field.reference.is_none() {
        return Ok(None);
    }

    if options.is_cleared(raw) {
        return Ok(Some(cleared_value(field.kind)));
    }

    let separator = options.decimal_separator;
    let kind = field.kind;
    let number_err = |source| ParseError::number(kind, raw, source);

    let value = match kind {
        FieldKind::Bool => Value::Bool(!raw.eq_ignore_ascii_case(FALSE_TOKEN)),
        FieldKind::Date => Value::Date(parse_date(raw, options)?),
        FieldKind::Decimal => Value::Decimal(parse_decimal(raw, separator).map_err(number_err)?),
        FieldKind::Float => Value::Float(parse_float(raw, separator).map_err(number_err)?),
        FieldKind::Int => Value::Int(parse_int(raw, separator).map_err(number_err)?),
        FieldKind::Money => {
            Value::Money(Money::new(parse_decimal(raw, separator).map_err(number_err)?))
        }
        FieldKind::OptionCode => {
            Value::OptionCode(OptionCode::new(parse_int(raw, separator).map_err(number_err)?))
        }
        FieldKind::Reference => {
            let Some(target) = field.reference else {
                return Ok(None);
            };

            Value::Reference(EntityRef::new(target, parse_uuid(raw)?))
        }
        FieldKind::Text => Value::Text(raw.to_string()),
        FieldKind::Uuid => Value::Uuid(parse_uuid(raw)?),
    };

    Ok(Some(value))
}

/// Value a cleared field binds to: `Null`, except for identifiers (nil id)
/// and money (zero amount).
#[must_use]
pub const fn cleared_value(kind: FieldKind) -> Value {
    match kind {
        FieldKind::Money => Value::Money(Money::ZERO),
        FieldKind::Uuid => Value::Uuid(Uuid::nil()),
        _ => Value::Null,
    }
}

fn parse_uuid(raw: &str) -> Result<Uuid, ParseError> {
    Uuid::parse_str(raw).map_err(|_| ParseError::Identifier {
        raw: raw.to_string(),
    })
}

/// Parse a calendar date and place it at UTC midnight, viewed from the
/// configured local offset.
fn parse_date(raw: &str, options: &BindOptions) -> Result<OffsetDateTime, ParseError> {
    let date_err = || ParseError::Date {
        raw: raw.to_string(),
    };

    let date = match &options.date_format {
        DateFormat::DayMonthYear => Date::parse(raw, format_description!("[day].[month].[year]")),
        DateFormat::Custom(format) => Date::parse(raw, format),
    }
    .map_err(|_| date_err())?;

    // the offset shift must stay inside the representable date range
    let offset = options.local_offset;
    if (offset.is_positive() && date.next_day().is_none())
        || (offset.is_negative() && date.previous_day().is_none())
    {
        return Err(date_err());
    }

    Ok(PrimitiveDateTime::new(date, Time::MIDNIGHT)
        .assume_utc()
        .to_offset(offset))
}
