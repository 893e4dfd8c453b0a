//! Declarative range checks and the per-path issue collection.
use crate::{
    coerce::{parse_decimal, parse_float, parse_int},
    locale::{BindOptions, MessageTemplates},
    model::{FieldKind, FieldModel},
};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// IssueKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Parsed value, or text length, outside the declared bounds.
    Range,
    /// Raw value could not be coerced into the field's type.
    InvalidType,
    /// Raw value could not be parsed while checking its range.
    Overflow,
}

///
/// ValidationIssue
///
/// One non-fatal problem with one submitted field. `raw` is the offending
/// value and `index` the list entry it was bound for (0 for scalars).
/// `attempted` carries every raw value submitted under the path so a form
/// can be re-displayed.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub kind: IssueKind,
    pub message: String,
    pub raw: String,
    pub index: usize,
    pub attempted: Vec<String>,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(
        field: &FieldModel,
        path: &str,
        kind: IssueKind,
        raw: &str,
        messages: &MessageTemplates,
    ) -> Self {
        let template = match kind {
            IssueKind::Range => &messages.range,
            IssueKind::InvalidType => &messages.invalid_type,
            IssueKind::Overflow => &messages.overflow,
        };

        Self {
            path: path.to_string(),
            kind,
            message: MessageTemplates::render(template, field_label(field, path)),
            raw: raw.to_string(),
            index: 0,
            attempted: vec![raw.to_string()],
        }
    }

    #[must_use]
    pub const fn at_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    #[must_use]
    pub fn with_attempted(mut self, attempted: Vec<String>) -> Self {
        self.attempted = attempted;
        self
    }
}

/// Display name, or the path with its entity prefix dropped.
#[must_use]
pub fn field_label<'a>(field: &'a FieldModel, path: &'a str) -> &'a str {
    field
        .label()
        .unwrap_or_else(|| path.split_once('.').map_or(path, |(_, rest)| rest))
}

///
/// ValidationIssues
///
/// Issues keyed by field path. Issues for one path are appended in the
/// order they were found, across all list entries.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationIssues(BTreeMap<String, Vec<ValidationIssue>>);

impl ValidationIssues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.0.entry(issue.path.clone()).or_default().push(issue);
    }

    #[must_use]
    pub fn get(&self, path: &str) -> &[ValidationIssue] {
        self.0.get(path).map(Vec::as_slice).unwrap_or_default()
    }

    /// Messages recorded for `path`, in order.
    #[must_use]
    pub fn messages(&self, path: &str) -> Vec<&str> {
        self.get(path).iter().map(|issue| issue.message.as_str()).collect()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.0.values().flatten()
    }

    /// Total number of issues across all paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<ValidationIssue>> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ValidationIssues {
    type Item = &'a ValidationIssue;
    type IntoIter = std::iter::Flatten<std::collections::btree_map::Values<'a, String, Vec<ValidationIssue>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values().flatten()
    }
}

///
/// check_range
///
/// Check `raw` against the field's declared range.
///
/// Text is measured in characters; numbers are parsed with the same
/// locale rules as coercion. Empty values and fields without a range are
/// never reported. Any other value that does not parse, the `null` and
/// clear tokens included, is reported as `Overflow` independently of the
/// coercion pass.
///
#[must_use]
pub fn check_range(field: &FieldModel, raw: &str, options: &BindOptions) -> Option<IssueKind> {
    let range = field.range?;
    if raw.is_empty() {
        return None;
    }

    let separator = options.decimal_separator;
    let within = match field.kind {
        FieldKind::Text => Ok(range.contains_len(raw.chars().count())),
        FieldKind::Int => parse_int(raw, separator).map(|v| range.contains_i64(v.into())),
        FieldKind::Decimal => parse_decimal(raw, separator).map(|v| range.contains_decimal(v)),
        FieldKind::Float => parse_float(raw, separator).map(|v| range.contains_f64(v)),
        _ => return None,
    };

    match within {
        Ok(true) => None,
        Ok(false) => Some(IssueKind::Range),
        Err(_) => Some(IssueKind::Overflow),
    }
}

///
/// TESTS
///
