//! Core runtime for formbind: entity models, raw-value lookup, coercion,
//! range validation, list resolution and the assembler that ties them
//! together.
#![warn(unreachable_pub)]

extern crate self as formbind;

// public exports are one module level down
pub mod assemble;
pub mod cache;
pub mod coerce;
pub mod error;
pub mod list;
pub mod locale;
pub mod model;
pub mod normalize;
pub mod record;
pub mod registry;
pub mod source;
pub mod traits;
pub mod types;
pub mod validate;
pub mod value;

#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Tracing target used by every event emitted while binding.
pub const TRACE_TARGET: &str = "formbind::bind";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, caches or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{EntityModel, FieldKind, FieldModel},
        source::{FormData, ValueSource},
        traits::{BindEntity, BindField},
        types::{EntityRef, Money, OptionCode},
        value::Value,
    };
}
