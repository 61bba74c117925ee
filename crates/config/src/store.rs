//! Read-only environment snapshot consumed by the resolver.
//!
//! Responsibilities:
//! - Hold an owned copy of key/value pairs taken from the process environment,
//!   `.env` files, or test fixtures.
//! - Answer exact-key lookups.
//!
//! Does NOT handle:
//! - Namespaced or case-insensitive lookups (see `resolver`).
//! - Reading `.env` files (see `loader`).
//!
//! Invariants:
//! - Keys are stored verbatim and matched case-sensitively.
//! - An empty value is present, not absent.
//! - The snapshot never writes back to the process environment.

use std::collections::HashMap;

/// Owned key/value snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvStore {
    vars: HashMap<String, String>,
}

impl EnvStore {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Add or replace a variable (builder style, mainly for tests and fixtures).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a variable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Look up a variable by its exact name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Insert every pair whose key is not already present.
    ///
    /// Returns the number of variables added.
    pub fn merge_missing<I, K, V>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut added = 0;
        for (key, value) in pairs {
            let key = key.into();
            if !self.vars.contains_key(&key) {
                self.vars.insert(key, value.into());
                added += 1;
            }
        }
        added
    }
}

impl<K, V> FromIterator<(K, V)> for EnvStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
