//! Per-bind memoization of raw value lookups.
use crate::source::ValueSource;
use std::collections::HashMap;

///
/// RawValueCache
///
/// Remembers the raw values looked up for each path during one bind, so
/// the validation and coercion passes over a field hit the source once.
/// The cache belongs to a single bind context; nothing is shared between
/// concurrent binds.
///

pub struct RawValueCache<'a> {
    source: &'a dyn ValueSource,
    values: HashMap<String, Vec<String>>,
}

impl<'a> RawValueCache<'a> {
    #[must_use]
    pub fn new(source: &'a dyn ValueSource) -> Self {
        Self {
            source,
            values: HashMap::new(),
        }
    }

    /// Values for `path`; an unsubmitted path yields an empty slice.
    pub fn get(&mut self, path: &str) -> &[String] {
        if !self.values.contains_key(path) {
            let values = self.source.lookup(path).unwrap_or_default();
            self.values.insert(path.to_string(), values);
        }

        self.values.get(path).map(Vec::as_slice).unwrap_or_default()
    }

    /// Drop everything captured so far.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of distinct paths captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

///
/// TESTS
///
