//! # Mesh Metadata
//!
//! Open string-keyed mapping recording which mode and parameters produced a
//! mesh instance.
//!
//! Merging is deliberately an explicit operation with a single documented
//! collision policy (see [`Metadata::merge`]) instead of ad hoc map
//! manipulation at each call site.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetaValue {
    /// Free-form text, e.g. the mode tag.
    Text(String),
    /// Numeric parameter copied verbatim from the pipeline input.
    Number(f64),
    /// Non-negative count, e.g. the number of seed points.
    Count(u64),
}

impl MetaValue {
    /// Returns the text payload, if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric payload, if this value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetaValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the count payload, if this value is a count.
    pub fn as_count(&self) -> Option<u64> {
        match self {
            MetaValue::Count(count) => Some(*count),
            _ => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(text: &str) -> Self {
        MetaValue::Text(text.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(text: String) -> Self {
        MetaValue::Text(text)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Number(value)
    }
}

impl From<u64> for MetaValue {
    fn from(count: u64) -> Self {
        MetaValue::Count(count)
    }
}

/// Ordered string-keyed metadata map attached to a mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    entries: BTreeMap<String, MetaValue>,
}

impl Metadata {
    /// Creates an empty metadata map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no entries are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts an entry, replacing any existing value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetaValue)> {
        self.entries.iter()
    }

    /// Merges `overrides` into this map.
    ///
    /// Collision policy: every key present in `overrides` replaces the
    /// existing entry; keys absent from `overrides` are kept unchanged.
    pub fn merge(&mut self, overrides: Metadata) {
        for (key, value) in overrides.entries {
            self.entries.insert(key, value);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut meta = Metadata::new();
        meta.insert("voronoi_mode", "surface");
        meta.insert("voronoi_density", 0.3);
        meta.insert("voronoi_seed_count", 4u64);

        assert_eq!(meta.len(), 3);
        assert_eq!(meta.get("voronoi_mode").unwrap().as_text(), Some("surface"));
        assert_eq!(meta.get("voronoi_density").unwrap().as_number(), Some(0.3));
        assert_eq!(meta.get("voronoi_seed_count").unwrap().as_count(), Some(4));
    }

    #[test]
    fn test_merge_overrides_win() {
        let mut base = Metadata::new();
        base.insert("source_file", "model.stl");
        base.insert("voronoi_mode", "surface");

        let mut overrides = Metadata::new();
        overrides.insert("voronoi_mode", "radial");

        base.merge(overrides);
        assert_eq!(base.get("voronoi_mode").unwrap().as_text(), Some("radial"));
        // Unrelated keys survive.
        assert_eq!(
            base.get("source_file").unwrap().as_text(),
            Some("model.stl")
        );
    }

    #[test]
    fn test_merge_empty_is_identity() {
        let mut base = Metadata::new();
        base.insert("voronoi_density", 0.5);
        let before = base.clone();

        base.merge(Metadata::new());
        assert_eq!(base, before);
    }

    #[test]
    fn test_wrong_accessor_returns_none() {
        let value = MetaValue::Number(1.0);
        assert_eq!(value.as_text(), None);
        assert_eq!(value.as_count(), None);
    }
}
