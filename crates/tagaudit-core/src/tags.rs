//! Tag mappings and the merged tag set.

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered mapping from tag name to a single string value, keys unique.
///
/// Two instances exist per audited file: one derived from the filename
/// and one from the embedded metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMapping {
    entries: IndexMap<CompactString, CompactString>,
}

impl TagMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag value, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl Into<CompactString>, value: impl Into<CompactString>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up a tag value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(CompactString::as_str)
    }

    /// Whether a tag name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for TagMapping
where
    K: Into<CompactString>,
    V: Into<CompactString>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The result of combining both tag sources for one file.
///
/// Precedence: a name-derived value wins over the embedded value for the
/// same tag; tags present in only one source pass through unchanged; tags
/// present in neither are absent (no defaulting).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedTagSet {
    entries: IndexMap<CompactString, CompactString>,
}

impl MergedTagSet {
    /// Overlay `from_embedded` with `from_name` (name wins on conflict).
    pub fn merge(from_name: &TagMapping, from_embedded: &TagMapping) -> Self {
        let mut entries: IndexMap<CompactString, CompactString> = IndexMap::new();
        for (name, value) in from_embedded.iter() {
            entries.insert(name.into(), value.into());
        }
        for (name, value) in from_name.iter() {
            entries.insert(name.into(), value.into());
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(CompactString::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for MergedTagSet
where
    K: Into<CompactString>,
    V: Into<CompactString>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
