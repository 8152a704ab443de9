//! Parsed HTML templates.

use scraper::{Html, Selector};

use crate::path::is_local;

/// An owned, mutable HTML document.
///
/// Wraps the parsed tree so callers never hold a borrow into the document
/// while it is being rewritten.
#[derive(Debug, Clone)]
pub struct HtmlTemplate {
    document: Html,
}

impl HtmlTemplate {
    /// Parse a full HTML document.
    pub fn parse(source: &str) -> Self {
        Self {
            document: Html::parse_document(source),
        }
    }

    /// Detach every element matching `selector` whose `attribute` is a local
    /// reference, returning those attribute values in document order.
    ///
    /// Elements with a remote reference stay in the document.
    pub fn remove_local(&mut self, selector: &Selector, attribute: &str) -> Vec<String> {
        let matched: Vec<_> = self
            .document
            .select(selector)
            .filter_map(|element| {
                let value = element.value().attr(attribute)?;
                is_local(value).then(|| (element.id(), value.to_string()))
            })
            .collect();

        matched
            .into_iter()
            .map(|(id, value)| {
                if let Some(mut node) = self.document.tree.get_mut(id) {
                    node.detach();
                }
                value
            })
            .collect()
    }

    /// Serialize the document back to markup.
    pub fn to_html(&self) -> String {
        self.document.html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn remove_local_returns_document_order() {
        let mut template = HtmlTemplate::parse(
            r#"<html><head><script src="a.js"></script></head>
            <body><script src="https://cdn/b.js"></script><script src="c.js"></script></body></html>"#,
        );

        let removed = template.remove_local(&selector("script[src]"), "src");
        assert_eq!(removed, vec!["a.js", "c.js"]);
    }

    #[test]
    fn remove_local_keeps_remote_elements() {
        let mut template = HtmlTemplate::parse(
            r#"<html><body><script src="a.js"></script><script src="https://cdn/b.js"></script></body></html>"#,
        );

        let removed = template.remove_local(&selector("script[src]"), "src");
        assert_eq!(removed, vec!["a.js"]);

        let html = template.to_html();
        assert!(!html.contains("a.js"));
        assert!(html.contains("https://cdn/b.js"));
        assert!(template.remove_local(&selector("script[src]"), "src").is_empty());
    }

    #[test]
    fn remove_local_without_matches_is_noop() {
        let source = r#"<html><head><title>Empty</title></head><body><p>hi</p></body></html>"#;
        let mut template = HtmlTemplate::parse(source);
        let before = template.to_html();

        assert!(template.remove_local(&selector("script[src]"), "src").is_empty());
        assert_eq!(template.to_html(), before);
    }

    #[test]
    fn inline_scripts_are_not_selected() {
        let mut template =
            HtmlTemplate::parse(r#"<html><body><script>window.x = 1;</script></body></html>"#);

        assert!(template.remove_local(&selector("script[src]"), "src").is_empty());
        assert!(template.to_html().contains("window.x = 1;"));
    }
}
