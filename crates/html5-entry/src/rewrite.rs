//! Discovery and substitution of HTML templates inside an [`Entry`].

use html5_entry_config::Entry;

const TEMPLATE_SUFFIX: &str = ".html";

fn is_template(path: &str) -> bool {
    path.ends_with(TEMPLATE_SUFFIX)
}

/// Collect every HTML template referenced by `entry`.
///
/// Map values are visited in insertion order. Duplicates are kept and
/// computed entries are skipped.
///
/// # Example
///
/// ```
/// use html5_entry::get_templates;
/// use html5_entry_config::Entry;
///
/// let entry = Entry::map([
///     ("main", Entry::from("index.html")),
///     ("vendor", Entry::list(["a.html", "b.js"])),
/// ]);
///
/// assert_eq!(get_templates(&entry), vec!["index.html", "a.html"]);
/// ```
pub fn get_templates(entry: &Entry) -> Vec<String> {
    match entry {
        Entry::Single(path) if is_template(path) => vec![path.clone()],
        Entry::Single(_) | Entry::Computed(_) => Vec::new(),
        Entry::List(paths) => paths.iter().filter(|p| is_template(p)).cloned().collect(),
        Entry::Map(entries) => entries.values().flat_map(get_templates).collect(),
    }
}

/// Splice `new_entries` in place of the first occurrence of `old_entry`.
///
/// Later occurrences are left alone. Returns `false` and leaves `existing`
/// untouched when `old_entry` is absent.
pub fn replace_entries(existing: &mut Vec<String>, old_entry: &str, new_entries: &[String]) -> bool {
    let Some(index) = existing.iter().position(|e| e == old_entry) else {
        return false;
    };

    existing.splice(index..=index, new_entries.iter().cloned());
    true
}

/// Replace `template` inside `entry` with `entries`.
///
/// - a single path is replaced by `entries` whatever its value
/// - a list has its first occurrence of `template` spliced
/// - a map has each value equal to `template` replaced, and each list value
///   spliced
/// - a computed entry is left alone
pub fn set_entries(entry: &mut Entry, template: &str, entries: &[String]) {
    match entry {
        Entry::Single(current) => {
            if current.as_str() != template {
                tracing::warn!(
                    entry = %current,
                    template,
                    "replacing single-path entry that does not match the template"
                );
            }
            *entry = Entry::List(entries.to_vec());
        }
        Entry::List(paths) => {
            replace_entries(paths, template, entries);
        }
        Entry::Computed(_) => {}
        Entry::Map(named) => {
            for value in named.values_mut() {
                match value {
                    Entry::Single(path) if path.as_str() == template => {
                        *value = Entry::List(entries.to_vec());
                    }
                    Entry::List(paths) => {
                        replace_entries(paths, template, entries);
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html5_entry_config::ComputedEntry;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn templates_from_single_path() {
        assert_eq!(get_templates(&Entry::from("index.html")), vec!["index.html"]);
        assert!(get_templates(&Entry::from("index.js")).is_empty());
    }

    #[test]
    fn templates_require_exact_suffix() {
        let entry = Entry::list(["page.htm", "page.HTML", "page.html.js", "page.html"]);
        assert_eq!(get_templates(&entry), vec!["page.html"]);
    }

    #[test]
    fn templates_from_map_keep_order_and_duplicates() {
        let entry = Entry::map([
            ("main", Entry::from("index.html")),
            ("vendor", Entry::list(["a.html", "b.js"])),
            ("again", Entry::list(["index.html"])),
        ]);

        assert_eq!(get_templates(&entry), vec!["index.html", "a.html", "index.html"]);
    }

    #[test]
    fn templates_skip_computed_entries() {
        let computed = Entry::Computed(ComputedEntry::new(|| Entry::from("index.html")));
        assert!(get_templates(&computed).is_empty());

        let nested = Entry::map([("lazy", computed), ("main", Entry::from("main.html"))]);
        assert_eq!(get_templates(&nested), vec!["main.html"]);
    }

    #[test]
    fn replace_splices_at_first_match() {
        let mut list = strings(&["x", "index.html", "y"]);
        assert!(replace_entries(&mut list, "index.html", &strings(&["a.css", "b.js"])));
        assert_eq!(list, strings(&["x", "a.css", "b.js", "y"]));

        assert!(!replace_entries(&mut list, "index.html", &strings(&["c.js"])));
        assert_eq!(list, strings(&["x", "a.css", "b.js", "y"]));
    }

    #[test]
    fn replace_only_touches_first_occurrence() {
        let mut list = strings(&["t.html", "m.js", "t.html"]);
        replace_entries(&mut list, "t.html", &strings(&["a.js"]));
        assert_eq!(list, strings(&["a.js", "m.js", "t.html"]));
    }

    #[test]
    fn replace_with_empty_list_removes_entry() {
        let mut list = strings(&["index.html", "y"]);
        replace_entries(&mut list, "index.html", &[]);
        assert_eq!(list, strings(&["y"]));
    }

    #[test]
    fn set_entries_replaces_matching_map_value() {
        let mut entry = Entry::map([("main", Entry::from("index.html"))]);
        set_entries(&mut entry, "index.html", &strings(&["a.js"]));
        assert_eq!(entry, Entry::map([("main", Entry::list(["a.js"]))]));
    }

    #[test]
    fn set_entries_splices_map_list_value() {
        let mut entry = Entry::map([("main", Entry::list(["index.html", "c.js"]))]);
        set_entries(&mut entry, "index.html", &strings(&["a.js"]));
        assert_eq!(entry, Entry::map([("main", Entry::list(["a.js", "c.js"]))]));
    }

    #[test]
    fn set_entries_leaves_other_map_values() {
        let mut entry = Entry::map([
            ("main", Entry::from("index.html")),
            ("other", Entry::from("other.html")),
            ("script", Entry::from("app.js")),
        ]);
        set_entries(&mut entry, "index.html", &strings(&["a.js"]));

        assert_eq!(
            entry,
            Entry::map([
                ("main", Entry::list(["a.js"])),
                ("other", Entry::from("other.html")),
                ("script", Entry::from("app.js")),
            ])
        );
    }

    #[test]
    fn set_entries_does_not_descend_into_nested_maps() {
        let nested = Entry::map([("inner", Entry::from("index.html"))]);
        let mut entry = Entry::map([("outer", nested.clone())]);
        set_entries(&mut entry, "index.html", &strings(&["a.js"]));
        assert_eq!(entry, Entry::map([("outer", nested)]));
    }

    #[test]
    fn set_entries_on_list() {
        let mut entry = Entry::list(["polyfill.js", "index.html"]);
        set_entries(&mut entry, "index.html", &strings(&["a.css", "b.js"]));
        assert_eq!(entry, Entry::list(["polyfill.js", "a.css", "b.js"]));
    }

    #[test]
    fn set_entries_replaces_any_single_path() {
        let mut entry = Entry::from("index.html");
        set_entries(&mut entry, "index.html", &strings(&["a.js"]));
        assert_eq!(entry, Entry::list(["a.js"]));

        let mut unrelated = Entry::from("main.js");
        set_entries(&mut unrelated, "index.html", &strings(&["a.js"]));
        assert_eq!(unrelated, Entry::list(["a.js"]));
    }

    #[test]
    fn set_entries_ignores_computed() {
        let computed = ComputedEntry::new(|| Entry::from("index.html"));
        let mut entry = Entry::Computed(computed.clone());
        set_entries(&mut entry, "index.html", &strings(&["a.js"]));
        assert_eq!(entry, Entry::Computed(computed));
    }

    #[test]
    fn substituted_entry_has_no_templates_left() {
        let mut entry = Entry::map([
            ("main", Entry::from("index.html")),
            ("vendor", Entry::list(["a.html", "b.js"])),
        ]);

        set_entries(&mut entry, "index.html", &strings(&["main.js"]));
        set_entries(&mut entry, "a.html", &strings(&["a.css"]));
        assert!(get_templates(&entry).is_empty());
    }
}
