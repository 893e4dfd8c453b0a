use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

///
/// FieldModel
/// Runtime field metadata used by coercion and validation.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldModel {
    /// Field name as submitted in form keys.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Read-only fields are described but never written by the assembler.
    pub writable: bool,
    pub range: Option<RangeModel>,
    /// Human-readable label used in issue messages.
    pub display_name: Option<&'static str>,
    /// Entity kind a reference field points at.
    pub reference: Option<&'static str>,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            writable: true,
            range: None,
            display_name: None,
            reference: None,
        }
    }

    #[must_use]
    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(RangeModel::new(min, max));
        self
    }

    #[must_use]
    pub const fn with_display_name(mut self, name: &'static str) -> Self {
        self.display_name = Some(name);
        self
    }

    #[must_use]
    pub const fn with_reference(mut self, target: &'static str) -> Self {
        self.reference = Some(target);
        self
    }

    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Configured display name, ignoring an empty one.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        self.display_name.filter(|name| !name.is_empty())
    }
}

///
/// FieldKind
///
/// Semantic type of a bindable field. Coercion and range checks dispatch
/// on this tag rather than on the Rust type of the target field.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum FieldKind {
    Bool,
    Date,
    Decimal,
    Float,
    Int,
    Money,
    OptionCode,
    Reference,
    Text,
    Uuid,
}

impl FieldKind {
    /// Kinds that carry a numeric or length range check.
    #[must_use]
    pub const fn is_range_checked(self) -> bool {
        matches!(self, Self::Text | Self::Int | Self::Decimal | Self::Float)
    }
}

///
/// RangeModel
///
/// Inclusive bounds, declared as floating literals and projected into the
/// field's own domain when checked. Integer projections truncate toward
/// zero; a bound that does not fit the domain leaves that side open.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeModel {
    pub min: f64,
    pub max: f64,
}

impl RangeModel {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains_len(&self, len: usize) -> bool {
        let len = i64::try_from(len).unwrap_or(i64::MAX);

        self.contains_i64(len)
    }

    #[must_use]
    pub fn contains_i64(&self, value: i64) -> bool {
        let min = self.min.to_i64().unwrap_or(i64::MIN);
        let max = self.max.to_i64().unwrap_or(i64::MAX);

        (min..=max).contains(&value)
    }

    #[must_use]
    pub fn contains_decimal(&self, value: Decimal) -> bool {
        let min = Decimal::from_f64(self.min).unwrap_or(Decimal::MIN);
        let max = Decimal::from_f64(self.max).unwrap_or(Decimal::MAX);

        (min..=max).contains(&value)
    }

    #[must_use]
    pub fn contains_f64(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

///
/// TESTS
///
