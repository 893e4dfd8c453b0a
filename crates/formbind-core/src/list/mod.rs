//! Entry counting and value selection for list targets.

use crate::{cache::RawValueCache, model::EntityModel, normalize::FALSE_TOKEN};

///
/// EntryCount
///
/// Result of counting the entries of a list submission.
///
/// `probed` is the number of consecutive `Entity.Id.N` keys found starting
/// at 0. `count` is authoritative: the number of values submitted under the
/// bare `Entity.Id` key.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EntryCount {
    pub probed: usize,
    pub count: usize,
}

/// Count the entries submitted for `model`.
pub fn resolve_entry_count(model: &EntityModel, cache: &mut RawValueCache<'_>) -> EntryCount {
    let mut probed = 0;
    while !cache.get(&model.indexed_path(model.primary_key, probed)).is_empty() {
        probed += 1;
    }

    let count = cache.get(&model.field_path(model.primary_key)).len();

    EntryCount { probed, count }
}

///
/// BooleanRun
///
/// Walks a checkbox run: a checked box submits its own token followed by
/// the `false` of its companion hidden input, an unchecked box submits
/// only the hidden `false`. Each step yields one logical value.
///
/// The decoding is only meaningful when the form actually pairs every
/// checkbox with such a hidden input; other submissions decode to
/// arbitrary tokens.
///

#[derive(Clone, Debug)]
pub struct BooleanRun<'a> {
    values: &'a [String],
    cursor: usize,
}

impl<'a> BooleanRun<'a> {
    #[must_use]
    pub const fn new(values: &'a [String]) -> Self {
        Self { values, cursor: 0 }
    }
}

impl<'a> Iterator for BooleanRun<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.values.get(self.cursor)?;
        self.cursor += if token == FALSE_TOKEN { 1 } else { 2 };

        Some(token.as_str())
    }
}

/// Logical value at `index` of a checkbox run.
#[must_use]
pub fn decode_boolean_run(values: &[String], index: usize) -> Option<&str> {
    BooleanRun::new(values).nth(index)
}

///
/// select_value
///
/// Pick the raw value for entry `index`.
///
/// With an entry count, a field submitting more values than entries is
/// decoded as a checkbox run. An index past the end selects nothing.
///
#[must_use]
pub fn select_value(values: &[String], index: usize, count: Option<usize>) -> Option<&str> {
    match count {
        Some(count) if values.len() > count => decode_boolean_run(values, index),
        _ => values.get(index).map(String::as_str),
    }
}
