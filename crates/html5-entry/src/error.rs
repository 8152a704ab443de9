//! Error types for template resolution.

use std::path::PathBuf;

use html5_entry_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EntryError>;

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("failed to read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
