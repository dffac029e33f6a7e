//! Body text extraction.
//!
//! Selects the post's content container, strips controls, page chrome and
//! noise from a copy of it, and linearizes what remains into
//! newline-separated text.

use dom_query::{Document, NodeRef, Selection};
use tracing::trace;

use crate::dom;
use crate::patterns::{MULTIPLE_NEWLINES, WHITESPACE_NORMALIZE};
use crate::selector::content::{
    ATTACHMENT_BLOCK_MAX_CHARS, ATTACHMENT_LABELS, BLOCK_TAGS, CHROME_SELECTOR, CONTENT_SELECTORS,
    CONTROL_SELECTOR, LABELED_BLOCK_SELECTOR, NAV_DOMINATED_MIN_CHARS, NAV_MARKERS, NOISE_SELECTOR,
    SCAN_SELECTOR, SILENT_TAGS,
};

/// Choose the element holding the post body.
///
/// Known content containers win in priority order. Otherwise the generic
/// block with the most text is used, skipping long blocks that contain
/// navigation phrases. `body` is the last resort.
#[must_use]
pub fn select_container(doc: &Document) -> Selection<'_> {
    let body = doc.select("body");

    if let Some(known) = dom::first_match(&body, CONTENT_SELECTORS) {
        trace!("content container matched a known selector");
        return known;
    }

    let mut best: Option<(usize, Selection)> = None;
    for candidate in dom::query_all(&body, SCAN_SELECTOR) {
        let text = dom::text(&candidate);
        let len = text.chars().count();
        if len > NAV_DOMINATED_MIN_CHARS && NAV_MARKERS.iter().any(|m| text.contains(m)) {
            continue;
        }
        if best.as_ref().is_none_or(|(best_len, _)| len > *best_len) {
            best = Some((len, candidate));
        }
    }

    match best {
        Some((_, container)) => container,
        None => body,
    }
}

/// Cleaned, linearized text of a content container.
///
/// The container's document is left untouched; cleanup runs on a copy.
#[must_use]
pub fn container_text(container: &Selection) -> String {
    let copy = dom::clone_contents(container);
    let root = copy.select("body");

    dom::remove(&root.select(CONTROL_SELECTOR));
    dom::remove(&root.select(CHROME_SELECTOR));
    dom::remove(&root.select(NOISE_SELECTOR));
    remove_attachment_blocks(&root);

    linearize(&root)
}

/// True when `text` opens with an attachment label standing as a word
/// (`첨부파일`, `첨부 :`), not merely with the same letters.
fn starts_with_attachment_label(text: &str) -> bool {
    ATTACHMENT_LABELS.iter().any(|label| {
        text.strip_prefix(label).is_some_and(|rest| {
            rest.chars()
                .next()
                .is_none_or(|c| c.is_whitespace() || ":：([".contains(c))
        })
    })
}

/// Remove short blocks that begin with an attachment label.
fn remove_attachment_blocks(root: &Selection) {
    for block in dom::query_all(root, LABELED_BLOCK_SELECTOR) {
        let text = dom::text(&block);
        if text.chars().count() <= ATTACHMENT_BLOCK_MAX_CHARS && starts_with_attachment_label(&text) {
            dom::remove(&block);
        }
    }
}

/// Render the subtree as text: line breaks at `br` and after block elements,
/// a space after table cells, whitespace inside text runs collapsed.
fn linearize(root: &Selection) -> String {
    let mut out = String::new();
    if let Some(node) = root.nodes().first() {
        write_children(node, &mut out);
    }

    let lines: Vec<&str> = out.lines().map(str::trim).collect();
    MULTIPLE_NEWLINES
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}

fn write_children(node: &NodeRef, out: &mut String) {
    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_text() {
            out.push_str(&WHITESPACE_NORMALIZE.replace_all(&c.text(), " "));
        } else if c.is_element() {
            let tag = c
                .node_name()
                .map(|t| t.to_ascii_lowercase())
                .unwrap_or_default();

            if tag == "br" {
                out.push('\n');
            } else if !SILENT_TAGS.contains(&tag.as_str()) {
                write_children(&c, out);
                if BLOCK_TAGS.contains(&tag.as_str()) {
                    out.push('\n');
                } else if tag == "td" || tag == "th" {
                    out.push(' ');
                }
            }
        }
        child = c.next_sibling();
    }
}
