//! ## Crate layout
//! - `binder`: the `Binder` entry point for typed and by-name binds.
//! - `config`: loading of the named-binding configuration.
//! - `core`: models, coercion, validation, list resolution and assembly.
//! - `error`: public error type with a stable kind + origin taxonomy.
//!
//! Per-field problems are never errors; they come back as
//! `ValidationIssues` next to the best-effort bound value.

pub use formbind_config as config;
pub use formbind_core as core;

pub mod binder;
pub mod error;

// derive output refers to ::formbind paths
extern crate self as formbind;

/// re-exports
///
/// field types used by derived entities, so callers do not have to list
/// these crates in their own Cargo.toml
pub mod __reexports {
    pub use rust_decimal;
    pub use time;
    pub use uuid;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Modules used by derive output
//

pub use formbind_core::{
    assemble, locale, model, record, registry, source, traits, types, validate, value,
};

pub use binder::Binder;
pub use error::Error;
pub use formbind_derive::BindEntity;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        BindEntity, Binder,
        assemble::{BindOutcome, Bound},
        locale::{BindOptions, MessageTemplates},
        record::Record,
        source::{FormData, ValueSource},
        traits::{BindEntity as _, BindField as _},
        types::{EntityRef, Money, OptionCode},
        validate::{IssueKind, ValidationIssue, ValidationIssues},
        value::Value,
    };
}
