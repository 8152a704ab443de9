//! Build environment detection.

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`BuildEnvironment::from_env`].
pub const MODE_ENV_VAR: &str = "NODE_ENV";

const DEVELOPMENT: &str = "development";
const PRODUCTION: &str = "production";

/// Build mode the bundler runs in.
///
/// Any mode string is accepted; only `development` and `production` carry
/// meaning, so a mode such as `test` is neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEnvironment {
    mode: String,
}

impl BuildEnvironment {
    /// Environment for an explicit mode, falling back to `development`.
    pub fn from_mode(mode: Option<&str>) -> Self {
        let mode = match mode {
            Some(m) if !m.is_empty() => m,
            _ => DEVELOPMENT,
        };
        Self {
            mode: mode.to_string(),
        }
    }

    /// Environment taken from `NODE_ENV`.
    pub fn from_env() -> Self {
        let mode = std::env::var(MODE_ENV_VAR).ok();
        Self::from_mode(mode.as_deref())
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn develop(&self) -> bool {
        self.mode == DEVELOPMENT
    }

    pub fn production(&self) -> bool {
        self.mode == PRODUCTION
    }
}

impl Default for BuildEnvironment {
    fn default() -> Self {
        Self::from_mode(None)
    }
}
