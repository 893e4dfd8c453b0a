//! Runtime data model definitions.
//!
//! `model` holds the descriptors the assembler consumes: one `EntityModel`
//! per bindable type, one `FieldModel` per field. Descriptors are plain
//! static data, normally produced by `#[derive(BindEntity)]`, and are never
//! mutated while binding.
mod entity;
mod field;

pub use entity::*;
pub use field::*;

/// Join a path prefix and a segment with `.`; either side may be empty.
#[must_use]
pub fn join_path(prefix: &str, segment: &str) -> String {
    match (prefix.is_empty(), segment.is_empty()) {
        (true, _) => segment.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}.{segment}"),
    }
}
