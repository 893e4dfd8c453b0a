//! Domain value types produced by coercion that have no direct std or
//! crate equivalent.
use derive_more::{Deref, Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

///
/// OptionCode
///
/// Integer code of a labeled option (pick-list) value.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Deref,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct OptionCode(i32);

impl OptionCode {
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

///
/// Money
///
/// Monetary amount. The default value is the zero amount, which is also
/// what a cleared money field binds to.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deref,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

///
/// EntityRef
///
/// Typed reference to another entity: the referenced kind plus its id.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EntityRef {
    pub logical_name: String,
    pub id: Uuid,
}

impl EntityRef {
    pub fn new(logical_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            logical_name: logical_name.into(),
            id,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.logical_name, self.id)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_defaults_to_zero() {
        assert_eq!(Money::default(), Money::ZERO);
        assert!(Money::default().is_zero());
        assert!(!Money::new(Decimal::ONE).is_zero());
    }

    #[test]
    fn entity_ref_displays_kind_and_id() {
        let reference = EntityRef::new("account", Uuid::nil());

        assert_eq!(
            reference.to_string(),
            "account:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn option_code_round_trips_through_i32() {
        let code = OptionCode::from(100_000_001);

        assert_eq!(code.get(), 100_000_001);
        assert_eq!(i32::from(code), 100_000_001);
        assert_eq!(*code, 100_000_001);
    }
}
