//! Rank properties
//!
//! A string multimap carrying per-query and per-index settings. Each key maps
//! to an ordered list of values; looking up a missing key yields an empty
//! property rather than an error.

use rustc_hash::FxHashMap;

// ============================================================================
// Property
// ============================================================================

/// Values stored under one key
///
/// Borrowed view returned by [`Properties::lookup`].
#[derive(Debug, Clone, Copy)]
pub struct Property<'a> {
    values: &'a [String],
}

impl<'a> Property<'a> {
    /// Whether at least one value is present
    pub fn found(&self) -> bool {
        !self.values.is_empty()
    }

    /// First value, if any
    pub fn get(&self) -> Option<&'a str> {
        self.values.first().map(String::as_str)
    }

    /// First value, or `default` when the key is absent
    pub fn get_or(&self, default: &'a str) -> &'a str {
        self.get().unwrap_or(default)
    }

    /// Value at position `idx`
    pub fn get_at(&self, idx: usize) -> Option<&'a str> {
        self.values.get(idx).map(String::as_str)
    }

    /// Number of values
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// All values in insertion order
    pub fn values(&self) -> &'a [String] {
        self.values
    }
}

// ============================================================================
// Properties
// ============================================================================

/// String multimap of rank settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    data: FxHashMap<String, Vec<String>>,
    num_values: usize,
}

impl Properties {
    /// Create an empty property set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key`
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.data.entry(key.into()).or_default().push(value.into());
        self.num_values += 1;
        self
    }

    /// Remove all values under `key`
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if let Some(values) = self.data.remove(key) {
            self.num_values -= values.len();
        }
        self
    }

    /// Look up the values stored under `key`
    pub fn lookup(&self, key: &str) -> Property<'_> {
        let values = self.data.get(key).map(Vec::as_slice).unwrap_or(&[]);
        Property { values }
    }

    /// Replace the values of every key present in `other`
    pub fn import(&mut self, other: &Properties) -> &mut Self {
        for (key, values) in &other.data {
            self.remove(key);
            self.num_values += values.len();
            self.data.insert(key.clone(), values.clone());
        }
        self
    }

    /// Number of distinct keys
    pub fn num_keys(&self) -> usize {
        self.data.len()
    }

    /// Total number of values across all keys
    pub fn num_values(&self) -> usize {
        self.num_values
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.data.clear();
        self.num_values = 0;
    }
}
