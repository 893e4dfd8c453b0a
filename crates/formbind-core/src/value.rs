use crate::{
    model::FieldKind,
    types::{EntityRef, Money, OptionCode},
};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Value
///
/// Result of coercing one raw string for one field.
///
/// Null → the field's value is cleared (Option::None on the target).
/// Identifier and money kinds never coerce to Null; they bind to the nil
/// id and the zero amount instead.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Date(OffsetDateTime),
    Decimal(Decimal),
    Float(f64),
    Int(i32),
    Money(Money),
    OptionCode(OptionCode),
    Reference(EntityRef),
    Text(String),
    Uuid(Uuid),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Field kind this value satisfies, or `None` for `Null`.
    #[must_use]
    pub const fn kind(&self) -> Option<FieldKind> {
        let kind = match self {
            Self::Null => return None,
            Self::Bool(_) => FieldKind::Bool,
            Self::Date(_) => FieldKind::Date,
            Self::Decimal(_) => FieldKind::Decimal,
            Self::Float(_) => FieldKind::Float,
            Self::Int(_) => FieldKind::Int,
            Self::Money(_) => FieldKind::Money,
            Self::OptionCode(_) => FieldKind::OptionCode,
            Self::Reference(_) => FieldKind::Reference,
            Self::Text(_) => FieldKind::Text,
            Self::Uuid(_) => FieldKind::Uuid,
        };

        Some(kind)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Value::Null.kind(), None);
        assert_eq!(Value::Int(1).kind(), Some(FieldKind::Int));
        assert_eq!(Value::Money(Money::ZERO).kind(), Some(FieldKind::Money));
        assert_eq!(Value::Uuid(Uuid::nil()).kind(), Some(FieldKind::Uuid));
        assert!(Value::Null.is_null());
        assert_eq!(Value::Text("x".into()).as_text(), Some("x"));
    }
}
