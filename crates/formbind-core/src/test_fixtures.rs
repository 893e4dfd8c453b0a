//! Shared helpers for unit tests across the crate.
use crate::source::ValueSource;
use std::{cell::RefCell, collections::HashMap};

///
/// CountingSource
///
/// In-memory source that records how often each path was looked up.
///

pub(crate) struct CountingSource {
    values: HashMap<String, Vec<String>>,
    hits: RefCell<HashMap<String, usize>>,
}

impl CountingSource {
    pub(crate) fn new(entries: &[(&str, &[&str])]) -> Self {
        let values = entries
            .iter()
            .map(|(path, values)| {
                let values = values.iter().map(ToString::to_string).collect();
                ((*path).to_string(), values)
            })
            .collect();

        Self {
            values,
            hits: RefCell::default(),
        }
    }

    pub(crate) fn hits(&self, path: &str) -> usize {
        self.hits.borrow().get(path).copied().unwrap_or_default()
    }
}

impl ValueSource for CountingSource {
    fn lookup(&self, path: &str) -> Option<Vec<String>> {
        *self.hits.borrow_mut().entry(path.to_string()).or_default() += 1;

        self.values.get(path).cloned()
    }
}
