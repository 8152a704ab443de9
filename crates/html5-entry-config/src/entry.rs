//! Bundler entry configuration.
//!
//! Mirrors the shape of a bundler `entry` option: a single path, an ordered
//! list of paths, a named mapping of entries, or a computed entry supplied by
//! the caller. Only the first three shapes are ever traversed.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Entry configuration
///
/// Deserializes from an untagged value: a string, an array of strings, or an
/// object whose values are themselves entries.
///
/// # Example
///
/// ```
/// use html5_entry_config::Entry;
/// use serde_json::json;
///
/// let entry: Entry = serde_json::from_value(json!({
///     "main": "index.html",
///     "vendor": ["a.html", "b.js"]
/// }))
/// .unwrap();
///
/// assert!(matches!(entry, Entry::Map(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A single path
    Single(String),
    /// An ordered list of paths
    List(Vec<String>),
    /// Named entries, in insertion order
    Map(IndexMap<String, Entry>),
    /// Opaque entry computed by the caller
    #[serde(skip)]
    Computed(ComputedEntry),
}

impl Entry {
    /// Build a named mapping from `(name, entry)` pairs.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Entry)>,
    {
        Entry::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a list entry.
    pub fn list<S: Into<String>>(paths: impl IntoIterator<Item = S>) -> Self {
        Entry::List(paths.into_iter().map(Into::into).collect())
    }
}

impl Default for Entry {
    fn default() -> Self {
        Entry::List(Vec::new())
    }
}

impl From<&str> for Entry {
    fn from(path: &str) -> Self {
        Entry::Single(path.to_string())
    }
}

impl From<String> for Entry {
    fn from(path: String) -> Self {
        Entry::Single(path)
    }
}

impl From<Vec<String>> for Entry {
    fn from(paths: Vec<String>) -> Self {
        Entry::List(paths)
    }
}

/// An entry produced by a caller-provided closure.
///
/// The closure is never invoked while discovering or rewriting templates.
/// Two computed entries are equal only if they share the same closure.
#[derive(Clone)]
pub struct ComputedEntry(Arc<dyn Fn() -> Entry + Send + Sync>);

impl ComputedEntry {
    pub fn new(f: impl Fn() -> Entry + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }
}

impl fmt::Debug for ComputedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ComputedEntry(..)")
    }
}

impl PartialEq for ComputedEntry {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
