//! Extraction of local stylesheet and script references from a template.

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::template::HtmlTemplate;

static SHEETS: Lazy<Selector> = Lazy::new(|| selector("link[href]"));
static SCRIPTS: Lazy<Selector> = Lazy::new(|| selector("script[src]"));

fn selector(css: &str) -> Selector {
    match Selector::parse(css) {
        Ok(selector) => selector,
        Err(err) => unreachable!("invalid built-in selector `{css}`: {err}"),
    }
}

/// The result of [`extract_parts`]: the rewritten template and the assets
/// that were taken out of it.
#[derive(Debug, Clone)]
pub struct ExtractedParts {
    /// Template with every local `<link>` and `<script>` removed
    pub template: HtmlTemplate,
    /// Local stylesheet references followed by local script references,
    /// each group in document order
    pub assets: Vec<String>,
}

/// Remove the locally referenced stylesheets and scripts from `template`.
///
/// `<link href>` and `<script src>` elements pointing at remote URLs or data
/// URIs are left in place and are not reported.
///
/// # Example
///
/// ```
/// use html5_entry::{HtmlTemplate, extract_parts};
///
/// let template = HtmlTemplate::parse(
///     r#"<link href="a.css"><link href="https://cdn/x.css"><script src="b.js"></script>"#,
/// );
///
/// let parts = extract_parts(template);
/// assert_eq!(parts.assets, vec!["a.css", "b.js"]);
/// assert!(parts.template.to_html().contains("https://cdn/x.css"));
/// ```
pub fn extract_parts(mut template: HtmlTemplate) -> ExtractedParts {
    let sheets = template.remove_local(&SHEETS, "href");
    let scripts = template.remove_local(&SCRIPTS, "src");

    tracing::trace!(
        sheets = sheets.len(),
        scripts = scripts.len(),
        "extracted local assets from template"
    );

    let mut assets = sheets;
    assets.extend(scripts);

    ExtractedParts { template, assets }
}
