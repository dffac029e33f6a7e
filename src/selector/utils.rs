//! Utility functions for selector pattern matching
//!
//! Class-token helpers shared by the rule tables.

use crate::dom;
use dom_query::Selection;

/// True when any class token satisfies `pred`
#[must_use]
pub fn any_class<F>(sel: &Selection, pred: F) -> bool
where
    F: Fn(&str) -> bool,
{
    dom::class_tokens(sel).iter().any(|t| pred(&t.to_ascii_lowercase()))
}

/// Case-insensitive substring test against a keyword list
#[must_use]
pub fn contains_any_ignore_case(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles.iter().any(|n| lower.contains(&n.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_class_tests_whole_tokens() {
        let doc = dom::parse(r#"<div class="list-item  container-fluid">x</div>"#);
        let div = doc.select("div");

        assert!(any_class(&div, |t| t == "list-item"));
        assert!(!any_class(&div, |t| t == "container"));
        assert!(any_class(&div, |t| t.starts_with("container")));
    }

    #[test]
    fn test_any_class_lowercases_tokens() {
        let doc = dom::parse(r#"<div class="BoardItem">x</div>"#);
        assert!(any_class(&doc.select("div"), |t| t == "boarditem"));
    }

    #[test]
    fn test_contains_any_ignore_case() {
        assert!(contains_any_ignore_case("/img/Site_LOGO.png", &["logo"]));
        assert!(!contains_any_ignore_case("/upload/photo.jpg", &["logo", "icon"]));
    }
}
