use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// A string-keyed collection of raw input values.
///
/// [`Source::get`] returns all the values associated with a key, in the order they were
/// received. An empty slice means that the key is absent.
///
/// It is implemented for:
///
/// - single-valued maps (`HashMap<String, String>`, `BTreeMap<String, String>`,
///   `IndexMap<String, String>`), returning at most one value per key;
/// - multi-valued maps (`HashMap<String, Vec<String>>`, `BTreeMap<String, Vec<String>>`,
///   `IndexMap<String, Vec<String>>`);
/// - [`FormData`](crate::FormData), the parsed representation of a URL-encoded form.
pub trait Source {
    /// All values associated with `key`.
    fn get(&self, key: &str) -> &[String];
}

impl<S: Source + ?Sized> Source for &S {
    fn get(&self, key: &str) -> &[String] {
        (**self).get(key)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn get(&self, key: &str) -> &[String] {
        (**self).get(key)
    }
}

impl<H: BuildHasher> Source for HashMap<String, String, H> {
    fn get(&self, key: &str) -> &[String] {
        HashMap::get(self, key).map(std::slice::from_ref).unwrap_or_default()
    }
}

impl<H: BuildHasher> Source for HashMap<String, Vec<String>, H> {
    fn get(&self, key: &str) -> &[String] {
        HashMap::get(self, key).map(Vec::as_slice).unwrap_or_default()
    }
}

impl Source for BTreeMap<String, String> {
    fn get(&self, key: &str) -> &[String] {
        BTreeMap::get(self, key).map(std::slice::from_ref).unwrap_or_default()
    }
}

impl Source for BTreeMap<String, Vec<String>> {
    fn get(&self, key: &str) -> &[String] {
        BTreeMap::get(self, key).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<H: BuildHasher> Source for IndexMap<String, String, H> {
    fn get(&self, key: &str) -> &[String] {
        IndexMap::get(self, key).map(std::slice::from_ref).unwrap_or_default()
    }
}

impl<H: BuildHasher> Source for IndexMap<String, Vec<String>, H> {
    fn get(&self, key: &str) -> &[String] {
        IndexMap::get(self, key).map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_valued_maps_return_at_most_one_value() {
        let map = HashMap::from([("a".to_string(), "1".to_string())]);
        assert_eq!(Source::get(&map, "a"), ["1"]);
        assert!(Source::get(&map, "b").is_empty());

        let map = BTreeMap::from([("a".to_string(), String::new())]);
        assert_eq!(Source::get(&map, "a"), [""]);
    }

    #[test]
    fn multi_valued_maps_preserve_order() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), vec!["3".to_string(), "1".to_string()]);
        assert_eq!(Source::get(&map, "a"), ["3", "1"]);
        assert!(Source::get(&map, "A").is_empty());
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let map = HashMap::from([("Int".to_string(), vec!["1".to_string()])]);
        assert!(Source::get(&map, "int").is_empty());
    }

    #[test]
    fn trait_objects_are_sources() {
        let map = HashMap::from([("a".to_string(), "1".to_string())]);
        let boxed: Box<dyn Source> = Box::new(map);
        assert_eq!(boxed.get("a"), ["1"]);
    }
}
