//! Registry of names already seen during one detection run

use std::collections::HashMap;

/// Sort key → first-seen original name.
///
/// Append-only: once a key is present it keeps its first name for the rest
/// of the run. Entries enumerate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    index: HashMap<String, usize>,
    names: Vec<String>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Original name registered under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.names[i].as_str())
    }

    /// Register `name` under `key` unless the key is taken.
    ///
    /// Returns `false` when an earlier name already owns the key.
    pub fn insert(&mut self, key: String, name: String) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.names.len());
        self.names.push(name);
        true
    }

    /// Registered names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
