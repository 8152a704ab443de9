//! Resolution of HTML template entries.
//!
//! Ties the pieces together: every template found in an [`Entry`] is read,
//! stripped of its local stylesheets and scripts, and replaced in the entry by
//! those assets.
//!
//! ```text
//! entry ─► get_templates ─► read ─► extract_parts ─► set_entries ─► entry'
//!                                        │
//!                                        └─► rewritten HTML
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use html5_entry_config::{ConfigDiscovery, Entry, Html5EntryConfig};

use crate::error::{EntryError, Result};
use crate::extract::extract_parts;
use crate::rewrite::{get_templates, set_entries};
use crate::template::HtmlTemplate;

/// Where template markup comes from.
pub trait TemplateSource {
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads templates from disk, relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsTemplateSource {
    root: PathBuf,
}

impl FsTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for FsTemplateSource {
    fn read(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(self.root.join(path))
    }
}

/// A template that was substituted in the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    /// Template path as it appeared in the entry
    pub path: String,
    /// Assets that took its place
    pub assets: Vec<String>,
    /// Template markup without the extracted tags
    pub html: String,
}

/// Replaces HTML template entries with the assets they reference.
///
/// # Example
///
/// ```no_run
/// use html5_entry::{FsTemplateSource, HtmlEntryResolver};
/// use html5_entry_config::Entry;
///
/// # fn main() -> html5_entry::Result<()> {
/// let mut entry = Entry::from("src/index.html");
/// let resolver = HtmlEntryResolver::new(FsTemplateSource::new("."));
///
/// for template in resolver.resolve(&mut entry)? {
///     println!("{} -> {:?}", template.path, template.assets);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HtmlEntryResolver<S> {
    source: S,
    relative_assets: bool,
}

impl HtmlEntryResolver<FsTemplateSource> {
    /// Resolver reading from `config.root`, honouring `config.relative_assets`.
    pub fn from_config(config: &Html5EntryConfig) -> Self {
        let environment = config.environment();
        tracing::debug!(
            root = %config.root.display(),
            mode = environment.mode(),
            "creating html entry resolver"
        );

        Self::new(FsTemplateSource::new(&config.root)).with_relative_assets(config.relative_assets)
    }
}

impl<S: TemplateSource> HtmlEntryResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            relative_assets: true,
        }
    }

    /// Rebase extracted assets onto the template's directory (default: on).
    pub fn with_relative_assets(mut self, enabled: bool) -> Self {
        self.relative_assets = enabled;
        self
    }

    /// Substitute every HTML template referenced by `entry`.
    ///
    /// Templates are processed in discovery order; a template listed twice is
    /// read and substituted twice.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::TemplateRead` when a template cannot be read. The
    /// entry keeps the substitutions made before the failure.
    pub fn resolve(&self, entry: &mut Entry) -> Result<Vec<ResolvedTemplate>> {
        let templates = get_templates(entry);
        let mut resolved = Vec::with_capacity(templates.len());

        for path in templates {
            let source = self
                .source
                .read(Path::new(&path))
                .map_err(|source| EntryError::TemplateRead {
                    path: PathBuf::from(&path),
                    source,
                })?;

            let parts = extract_parts(HtmlTemplate::parse(&source));
            let assets: Vec<String> = if self.relative_assets {
                parts.assets.iter().map(|asset| rebase(&path, asset)).collect()
            } else {
                parts.assets
            };

            tracing::debug!(template = %path, assets = assets.len(), "resolved html template");
            set_entries(entry, &path, &assets);

            resolved.push(ResolvedTemplate {
                html: parts.template.to_html(),
                path,
                assets,
            });
        }

        if !resolved.is_empty() {
            tracing::info!(templates = resolved.len(), "replaced html entries");
        }

        Ok(resolved)
    }
}

/// Substitute the templates of `config.entry` in place, reading them from
/// `config.root`.
pub fn resolve_config(config: &mut Html5EntryConfig) -> Result<Vec<ResolvedTemplate>> {
    let resolver = HtmlEntryResolver::from_config(config);
    resolver.resolve(&mut config.entry)
}

/// Discover the config under `root` and resolve its entry.
///
/// A relative `root` in the config is taken relative to the discovery root.
pub fn discover_and_resolve(
    root: impl AsRef<Path>,
) -> Result<(Html5EntryConfig, Vec<ResolvedTemplate>)> {
    let root = root.as_ref();
    let mut config = ConfigDiscovery::new(root).load()?;
    if config.root.is_relative() {
        config.root = root.join(&config.root);
    }

    let resolved = resolve_config(&mut config)?;
    Ok((config, resolved))
}

/// Resolve `asset` against the directory containing `template`.
///
/// An absolute `asset` replaces the template directory and is kept as is,
/// matching how `Path::join` treats absolute paths.
fn rebase(template: &str, asset: &str) -> String {
    let dir = Path::new(template).parent().unwrap_or_else(|| Path::new(""));
    path_clean::clean(dir.join(asset))
        .to_string_lossy()
        .replace('\\', "/")
}
