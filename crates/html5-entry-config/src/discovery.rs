//! File-based config discovery
//!
//! Finds an html5-entry configuration file and layers it, together with
//! `HTML5_ENTRY_*` environment variables, over the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::Deserialize;
use serde_json::Value;

use crate::config::Html5EntryConfig;
use crate::entry::Entry;
use crate::error::{ConfigError, Result};

/// Name of the dedicated config file
pub const CONFIG_FILE: &str = "html5-entry.toml";

/// Field read from `package.json`
pub const PACKAGE_FIELD: &str = "html5Entry";

/// Prefix for environment overrides (`HTML5_ENTRY_MODE`, `HTML5_ENTRY_ROOT`, ...)
pub const ENV_PREFIX: &str = "HTML5_ENTRY_";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use html5_entry_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. `html5-entry.toml`
    /// 2. `package.json` with a non-null `html5Entry` field
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from the discovered file, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<Html5EntryConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load config from a specific file path
    ///
    /// Scalar settings go through figment so `HTML5_ENTRY_*` variables can
    /// override them. `entry` is read straight from the file instead, since
    /// figment dictionaries are key-sorted and map entries must keep their
    /// declaration order. It cannot be overridden from the environment.
    pub fn load_from(&self, path: &Path) -> Result<Html5EntryConfig> {
        tracing::debug!(path = %path.display(), "loading html5-entry config");

        let file_value = read_config_value(path)?;
        let entry = file_value
            .get("entry")
            .map(Entry::deserialize)
            .transpose()
            .map_err(|e| ConfigError::invalid("entry", e))?;

        let mut config: Html5EntryConfig = Figment::new()
            .merge(Serialized::defaults(Html5EntryConfig::default()))
            .merge(Serialized::defaults(file_value))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["entry"]))
            .extract()
            .map_err(|e| ConfigError::invalid(path.display().to_string(), e))?;

        if let Some(entry) = entry {
            config.entry = entry;
        }

        Ok(config)
    }
}

/// Raw contents of a config file as an order-preserving JSON value.
fn read_config_value(path: &Path) -> Result<Value> {
    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return read_package_field(path);
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ConfigError::invalid("toml", format!("Invalid TOML syntax: {e}")))
}

fn read_package_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let mut parsed: Value = serde_json::from_str(&content)
        .map_err(|e| ConfigError::invalid("package.json", format!("Invalid JSON: {e}")))?;

    match parsed.get_mut(PACKAGE_FIELD).map(Value::take) {
        Some(Value::Null) | None => Err(ConfigError::InvalidValue {
            field: PACKAGE_FIELD.to_string(),
            hint: Some(format!("Add a non-null '{PACKAGE_FIELD}' field to package.json")),
        }),
        Some(value) => Ok(value),
    }
}

/// Discover and load config from the current directory
pub fn discover() -> Result<Html5EntryConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(root).load()
}
