//! Top-level configuration for html5-entry.
//!
//! For file discovery, see the `discovery` module.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entry::Entry;
use crate::environment::BuildEnvironment;
use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Html5EntryConfig {
    /// Bundler entry, possibly referencing HTML templates
    #[serde(default)]
    pub entry: Entry,

    /// Directory templates are read from
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Rebase extracted assets onto the directory of their template
    #[serde(default = "default_true")]
    pub relative_assets: bool,

    /// Build mode; overrides `NODE_ENV` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

impl Default for Html5EntryConfig {
    fn default() -> Self {
        Self {
            entry: Entry::default(),
            root: default_root(),
            relative_assets: true,
            mode: None,
            settings: GlobalSettings::default(),
        }
    }
}

impl Html5EntryConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use html5_entry_config::{Entry, Html5EntryConfig};
    /// use serde_json::json;
    ///
    /// let config = Html5EntryConfig::from_value(json!({
    ///     "entry": "src/index.html"
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.entry, Entry::from("src/index.html"));
    /// assert!(config.relative_assets);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid("config", e))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid("config", e))
    }

    /// Build environment for this config; `mode` wins over `NODE_ENV`.
    pub fn environment(&self) -> BuildEnvironment {
        match &self.mode {
            Some(mode) => BuildEnvironment::from_mode(Some(mode)),
            None => BuildEnvironment::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_applies_defaults() {
        let config = Html5EntryConfig::from_value(json!({})).unwrap();
        assert_eq!(config.entry, Entry::List(vec![]));
        assert_eq!(config.root, PathBuf::from("."));
        assert!(config.relative_assets);
        assert!(config.mode.is_none());
    }

    #[test]
    fn from_value_reads_map_entry() {
        let config = Html5EntryConfig::from_value(json!({
            "entry": { "main": "index.html" },
            "relative_assets": false,
            "mode": "production"
        }))
        .unwrap();

        assert_eq!(config.entry, Entry::map([("main", Entry::from("index.html"))]));
        assert!(!config.relative_assets);
        assert!(config.environment().production());
    }

    #[test]
    fn from_value_keeps_map_order() {
        let config = Html5EntryConfig::from_value(json!({
            "entry": { "zeta": "z.html", "alpha": "a.html", "mid": "m.html" }
        }))
        .unwrap();

        let Entry::Map(map) = &config.entry else {
            panic!("expected map entry");
        };
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn from_value_rejects_bad_entry() {
        let err = Html5EntryConfig::from_value(json!({ "entry": 3 })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn to_value_serializes_config() {
        let config = Html5EntryConfig {
            entry: Entry::from("index.html"),
            ..Default::default()
        };

        let value = config.to_value().unwrap();
        assert_eq!(value["entry"], json!("index.html"));
        assert_eq!(value["relative_assets"], json!(true));
    }
}
