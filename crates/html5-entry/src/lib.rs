//! HTML entry points for bundlers.
//!
//! An HTML template listed as a bundler entry is not something the bundler can
//! compile. This crate finds such templates in an [`Entry`], takes the local
//! `<link href>` and `<script src>` references out of them, and puts those
//! assets in the template's place.
//!
//! # Example
//!
//! ```
//! use html5_entry::{HtmlTemplate, extract_parts, get_templates, set_entries};
//! use html5_entry_config::Entry;
//!
//! let mut entry = Entry::map([("main", Entry::list(["index.html", "c.js"]))]);
//!
//! for template in get_templates(&entry) {
//!     let parts = extract_parts(HtmlTemplate::parse(
//!         r#"<link href="a.css"><script src="a.js"></script>"#,
//!     ));
//!     set_entries(&mut entry, &template, &parts.assets);
//! }
//!
//! assert_eq!(entry, Entry::map([("main", Entry::list(["a.css", "a.js", "c.js"]))]));
//! ```
//!
//! Library code only emits `tracing` events; enable the `logging` feature for
//! ready-made subscriber setup.

pub mod error;
pub mod extract;
pub mod path;
pub mod resolver;
pub mod rewrite;
pub mod template;

#[cfg(feature = "logging")]
pub mod logging;

pub use error::{EntryError, Result};
pub use extract::{ExtractedParts, extract_parts};
pub use path::is_local;
pub use resolver::{
    FsTemplateSource, HtmlEntryResolver, ResolvedTemplate, TemplateSource, discover_and_resolve,
    resolve_config,
};
pub use rewrite::{get_templates, replace_entries, set_entries};
pub use template::HtmlTemplate;

pub use html5_entry_config::{ComputedEntry, Entry, Html5EntryConfig};
