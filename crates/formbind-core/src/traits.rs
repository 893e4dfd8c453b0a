use crate::{
    model::{EntityModel, FieldKind, FieldModel},
    types::{EntityRef, Money, OptionCode},
    value::Value,
};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

// ============================================================================
// FIELD TYPES
// ============================================================================

///
/// BindField
///
/// A Rust type that can hold a coerced form value.
/// `KIND` selects the coercion rules; `from_value` accepts the matching
/// `Value` variant (and `Null` for optional types) and rejects the rest.
///

pub trait BindField: Sized {
    const KIND: FieldKind;

    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_optional_bind_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl BindField for Option<$ty> {
                const KIND: FieldKind = FieldKind::$variant;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Null => Some(None),
                        Value::$variant(v) => Some(Some(v)),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_optional_bind_field! {
    bool => Bool,
    Decimal => Decimal,
    EntityRef => Reference,
    f64 => Float,
    i32 => Int,
    OffsetDateTime => Date,
    OptionCode => OptionCode,
    String => Text,
    Uuid => Uuid,
}

impl BindField for String {
    const KIND: FieldKind = FieldKind::Text;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::new()),
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl BindField for Uuid {
    const KIND: FieldKind = FieldKind::Uuid;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::nil()),
            Value::Uuid(id) => Some(id),
            _ => None,
        }
    }
}

impl BindField for Money {
    const KIND: FieldKind = FieldKind::Money;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::ZERO),
            Value::Money(amount) => Some(amount),
            _ => None,
        }
    }
}

// ============================================================================
// ENTITIES
// ============================================================================

///
/// BindEntity
///
/// A struct the assembler can populate. Normally derived with
/// `#[derive(BindEntity)]`, which generates the static model and the
/// field-writing match.
///

pub trait BindEntity: Default {
    const MODEL: &'static EntityModel;

    /// Write a coerced value into the named field.
    /// Returns false when the field is unknown or the value has the wrong kind.
    fn write_field(&mut self, field: &str, value: Value) -> bool;
}

///
/// EntityWriter
///
/// Sink the assembler writes coerced values into. Implemented for every
/// `BindEntity` and for the dynamic `Record`.
///

pub trait EntityWriter {
    fn write(&mut self, field: &'static FieldModel, value: Value) -> bool;
}

impl<T: BindEntity> EntityWriter for T {
    fn write(&mut self, field: &'static FieldModel, value: Value) -> bool {
        self.write_field(field.name, value)
    }
}

///
/// TESTS
///
