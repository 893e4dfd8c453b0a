//! Input boundary: where raw, path-keyed form values come from.
use std::collections::{BTreeMap, HashMap};

///
/// ValueSource
///
/// Flat, string-keyed view over submitted form data.
/// `None` means the key was not submitted at all.
///

pub trait ValueSource {
    fn lookup(&self, path: &str) -> Option<Vec<String>>;
}

impl<S: ValueSource + ?Sized> ValueSource for &S {
    fn lookup(&self, path: &str) -> Option<Vec<String>> {
        (**self).lookup(path)
    }
}

impl ValueSource for BTreeMap<String, Vec<String>> {
    fn lookup(&self, path: &str) -> Option<Vec<String>> {
        self.get(path).cloned()
    }
}

impl<S: std::hash::BuildHasher> ValueSource for HashMap<String, Vec<String>, S> {
    fn lookup(&self, path: &str) -> Option<Vec<String>> {
        self.get(path).cloned()
    }
}

///
/// FormData
///
/// Multimap of decoded form fields. Values under one key keep their
/// submission order, which list binding relies on.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormData {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one submitted value under `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(key.into()).or_default().push(value.into());
    }

    /// Replace every value under `key`.
    pub fn insert<I, V>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.fields
            .insert(key.into(), values.into_iter().map(Into::into).collect());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut form = Self::new();
        for (key, value) in iter {
            form.append(key, value);
        }

        form
    }
}

impl<K, V> Extend<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.append(key, value);
        }
    }
}

impl ValueSource for FormData {
    fn lookup(&self, path: &str) -> Option<Vec<String>> {
        self.fields.get(path).cloned()
    }
}

///
/// TESTS
///
