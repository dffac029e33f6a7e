//! DOM Operations Adapter
//!
//! Every heuristic in this crate reads markup through these functions rather
//! than calling `dom_query` directly: selection, text and attribute access,
//! ancestor walks, cloning and removal. Keeping the surface this small lets
//! the heuristics run against synthetic documents in tests.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

use crate::patterns::normalize_whitespace;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, trimmed, treating blank values as missing
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    get_attribute(sel, name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Whitespace-separated class tokens of the first node
#[must_use]
pub fn class_tokens(sel: &Selection) -> Vec<String> {
    get_attribute(sel, "class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Identity of the first node, for visited-sets
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|n| n.id)
}

/// Check whether the first node is one of `tags`
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    tag_name(sel).is_some_and(|t| tags.contains(&t.as_str()))
}

// === Text Content ===

/// All text of the node and its descendants, whitespace collapsed
#[must_use]
pub fn text(sel: &Selection) -> String {
    normalize_whitespace(&sel.text())
}

/// Text of the node's direct text children only
///
/// `<td>2024-05-01 <span>new</span></td>` yields `"2024-05-01 "`.
#[must_use]
pub fn own_text(sel: &Selection) -> String {
    let Some(node) = sel.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_text() {
            out.push_str(&c.text());
        }
        child = c.next_sibling();
    }
    out
}

// === Tree Navigation ===

/// Nearest element, starting with `sel` itself, for which `rule` holds
#[must_use]
pub fn closest<'a, F>(sel: &Selection<'a>, rule: F) -> Option<Selection<'a>>
where
    F: Fn(&Selection) -> bool,
{
    let mut current = sel.nodes().first().copied();
    while let Some(node) = current {
        if node.is_element() {
            let candidate = Selection::from(node);
            if rule(&candidate) {
                return Some(candidate);
            }
        }
        current = node.parent();
    }
    None
}

/// Parent element, if the node has one
#[must_use]
pub fn parent_element<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::parent)
        .filter(dom_query::NodeRef::is_element)
        .map(Selection::from)
}

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

// === Querying ===

/// Each matched node as its own single-node selection, in document order
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|n| Selection::from(*n)).collect()
}

/// Query all elements by CSS selector, one selection per element
#[must_use]
pub fn query_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    each(&sel.select(selector))
}

/// First element matched by the first selector in `selectors` that matches
#[must_use]
pub fn first_match<'a>(root: &Selection<'a>, selectors: &[&str]) -> Option<Selection<'a>> {
    selectors.iter().find_map(|selector| {
        let found = root.select(selector);
        found.nodes().first().map(|n| Selection::from(*n))
    })
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Copy the contents of an element into a fresh document
///
/// The copy is what cleanup mutates; the source document stays intact.
/// Read the copy through its `body`.
#[must_use]
pub fn clone_contents(sel: &Selection) -> Document {
    Document::from(sel.inner_html().to_string())
}
