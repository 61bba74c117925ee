//! Domain list and site×domain matrix.
//!
//! Responsibilities:
//! - Split the `domains` and `sites` values into ordered lists.
//! - Build the `Sites` map from composite `site.domain` keys to site names.
//!
//! Invariants:
//! - Splitting is verbatim: no trimming, no de-duplication. A trailing comma
//!   yields an empty entry.
//! - `Sites` keeps first-insertion order; re-inserting a key overwrites its
//!   value in place.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Split a comma-separated value into its raw parts.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

/// Insertion-ordered map from `"{site}.{domain}"` to the bare site name.
#[derive(Debug, Clone, Default)]
pub struct Sites {
    entries: IndexMap<String, String>,
}

impl Sites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the cross product of site names and domains, iterating domains
    /// under each site name.
    pub fn from_matrix(site_names: &[String], domains: &[String]) -> Self {
        let mut sites = Self::new();
        for site_name in site_names {
            for domain in domains {
                sites.insert(format!("{site_name}.{domain}"), site_name.clone());
            }
        }
        sites
    }

    /// Insert a composite key. An existing key keeps its position and takes
    /// the new value.
    pub fn insert(&mut self, key: String, site_name: String) {
        self.entries.insert(key, site_name);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// More than one composite key means the install serves several sites.
    pub fn is_multi_site(&self) -> bool {
        self.len() > 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Equal when the same entries appear in the same order.
impl PartialEq for Sites {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for Sites {}

impl Serialize for Sites {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, site_name) in &self.entries {
            map.serialize_entry(key, site_name)?;
        }
        map.end()
    }
}
