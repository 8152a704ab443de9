//! Configuration types for html5-entry.
//!
//! Holds the bundler [`Entry`] model that HTML templates are discovered in and
//! rewritten on, the [`BuildEnvironment`], and config file discovery.

pub mod config;
pub mod discovery;
pub mod entry;
pub mod environment;
pub mod error;

pub use config::*;
pub use entry::{ComputedEntry, Entry};
pub use environment::BuildEnvironment;
pub use error::*;

pub use discovery::{ConfigDiscovery, discover};
