use indexmap::IndexMap;

use crate::source::Source;

/// A multi-valued, order-preserving collection of form fields.
///
/// Keys are kept in order of first appearance; values are kept in the order they were
/// appended.
///
/// # Example
///
/// ```rust
/// use formbind::{FormData, Source};
///
/// let form = FormData::parse(b"tag=rust&name=Ferris%20the%20crab&tag=web");
/// assert_eq!(form.get("tag"), ["rust", "web"]);
/// assert_eq!(form.first("name"), Some("Ferris the crab"));
/// assert!(form.get("missing").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: IndexMap<String, Vec<String>>,
}

impl FormData {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` payload.
    ///
    /// Keys and values are percent-decoded, `+` is decoded as a space.
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`.
    pub fn parse(bytes: &[u8]) -> Self {
        let mut form = Self::new();
        form.extend_from_urlencoded(bytes);
        form
    }

    /// Parse an `application/x-www-form-urlencoded` payload and append its fields to this form.
    pub fn extend_from_urlencoded(&mut self, bytes: &[u8]) {
        self.extend(form_urlencoded::parse(bytes));
    }

    /// Append a value to the list of values associated with `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// The first value associated with `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).first().map(String::as_str)
    }

    /// Iterate over the keys of this form, in order of first appearance.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The number of distinct keys in this form.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Source for FormData {
    fn get(&self, key: &str) -> &[String] {
        self.fields
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl<K, V> Extend<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.append(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        form.extend(iter);
        form
    }
}

impl From<FormData> for IndexMap<String, Vec<String>> {
    fn from(form: FormData) -> Self {
        form.fields
    }
}
