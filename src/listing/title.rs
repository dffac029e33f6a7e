//! Title recovery for rows whose anchors carry no usable label.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{normalize_whitespace, META_FIELDS, META_LABEL, PUNCT_OR_NUMERIC};
use crate::selector::listing::{GARBAGE_LABELS, TITLE_LIKE_SELECTORS};

/// Text that can never be a post title: single characters, numbers, dates,
/// punctuation, metadata cells, badges and author names.
#[must_use]
pub fn is_garbage_title(text: &str) -> bool {
    let text = text.trim();
    if text.chars().count() <= 1 || PUNCT_OR_NUMERIC.is_match(text) || META_LABEL.is_match(text) {
        return true;
    }

    let lower = text.to_lowercase();
    GARBAGE_LABELS.iter().any(|label| label.to_lowercase() == lower)
}

/// First non-garbage text among the row's title-like elements.
///
/// Selectors are tried in priority order; within one selector, in document
/// order.
#[must_use]
pub fn title_from_elements(row: &Selection) -> Option<String> {
    TITLE_LIKE_SELECTORS.iter().find_map(|selector| {
        dom::query_all(row, selector)
            .iter()
            .map(dom::text)
            .find(|text| !is_garbage_title(text))
    })
}

/// The row's full text with author, date, view-count and share fields
/// stripped.
#[must_use]
pub fn title_from_row_text(row: &Selection) -> Option<String> {
    let mut text = dom::text(row);
    for pattern in META_FIELDS.iter() {
        text = pattern.replace_all(&text, " ").into_owned();
    }

    let text = normalize_whitespace(&text);
    (!is_garbage_title(&text)).then_some(text)
}

/// Recover a title for a row, trying title-like elements before the
/// stripped row text.
#[must_use]
pub fn recover_title(row: &Selection) -> Option<String> {
    title_from_elements(row).or_else(|| title_from_row_text(row))
}
