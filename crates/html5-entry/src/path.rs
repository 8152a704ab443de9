//! Classification of asset references found in HTML templates.

/// Prefixes marking a reference the bundler must not compile: remote URLs,
/// protocol-relative references and inline data URIs.
const NON_LOCAL_PREFIXES: [&str; 4] = [":", "http:", "https:", "data:"];

/// Returns `true` if `path` names an asset the bundler should compile.
///
/// Empty references are never local.
///
/// # Example
///
/// ```
/// use html5_entry::is_local;
///
/// assert!(is_local("./app.js"));
/// assert!(!is_local("https://cdn.example.com/lib.js"));
/// assert!(!is_local(""));
/// ```
pub fn is_local(path: &str) -> bool {
    !path.is_empty()
        && !NON_LOCAL_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
}
