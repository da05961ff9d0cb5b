//! # Ordered Attribute Maps
//!
//! Manifest attributes, the substitution mapping and every declared-property
//! view are kept in insertion order. Placeholder substitution rewrites values
//! in place while walking the map, so the order in which keys were declared
//! decides which references see already rewritten values. A hash map would
//! make that order arbitrary, hence this small ordered map.
//!
//! Re-inserting an existing key replaces its value but keeps its position.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An insertion-ordered map of attribute keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

/// The attributes written onto an archive manifest.
pub type ResolvedAttributes = AttributeMap;

/// Lookup table for `${NAME}` placeholders, populated even for attributes
/// that were suppressed from the manifest.
pub type SubstitutionMapping = AttributeMap;

impl AttributeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Insert a value, returning the previous one if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|index| self.entries[index].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Remove a key, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.position(key).map(|index| self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Render the map as manifest lines (`Key: Value`), one per entry.
    pub fn to_manifest_string(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{}: {}\n", key, value))
            .collect()
    }

    /// Value at a given position. Used by in-place rewriting, where the map
    /// is walked by index so each step can read the current state of the map.
    pub(crate) fn value_at(&self, index: usize) -> &str {
        &self.entries[index].1
    }

    pub(crate) fn set_value_at(&mut self, index: usize, value: String) {
        self.entries[index].1 = value;
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
