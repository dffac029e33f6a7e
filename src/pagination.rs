//! Next-page resolution for listing pages.
//!
//! The pager widget is located through an ordered selector list. The page
//! after the current one is looked up first by its number, then through a
//! "next" button. Query-only links (`?pageIndex=2`) keep the listing URL's
//! other parameters, since boards commonly identify themselves through them
//! (`?cbIdx=57&pageIndex=2`).

use dom_query::{Document, Selection};
use tracing::{debug, trace};
use url::Url;

use crate::dom;
use crate::result::PaginationState;
use crate::selector::pager::{
    ACTIVE_PAGE_SELECTOR, HIDDEN_LABEL_SELECTOR, NEXT_SELECTORS, NEXT_TEXT_MARKERS,
    PAGER_SELECTORS, PAGE_QUERY_KEYS,
};
use crate::url_utils::{is_navigable_href, merge_query, query_values, resolve_href};

/// Derive the current page and the next page's URL from a listing document.
///
/// Never fails: whatever cannot be determined falls back to page 1 and no
/// next URL.
#[must_use]
pub fn resolve_pagination(doc: &Document, page_url: &Url) -> PaginationState {
    let body = doc.select("body");
    let pager = dom::first_match(&body, PAGER_SELECTORS);

    let current_page = pager
        .as_ref()
        .and_then(active_page)
        .or_else(|| page_from_query(page_url))
        .unwrap_or(1);

    let next_url = pager.and_then(|pager| {
        let target = current_page.checked_add(1)?;
        let href = find_next_href(&pager, target)?;
        resolve_next_url(&href, page_url)
    });

    debug!(current_page, next = ?next_url, "pagination resolved");
    PaginationState {
        current_page,
        next_url,
    }
}

/// First run of ASCII digits in `text`.
fn first_number(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Page number of a pager link: digits, optionally wrapped in brackets.
fn page_number(text: &str) -> Option<u32> {
    let inner = text.trim().trim_matches(|c: char| "[]()".contains(c) || c.is_whitespace());
    if inner.is_empty() || !inner.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    inner.parse().ok()
}

/// Text of a pager element without its screen-reader-only labels.
fn visible_text(sel: &Selection) -> String {
    if dom::query_all(sel, HIDDEN_LABEL_SELECTOR).is_empty() {
        return dom::text(sel);
    }
    let copy = dom::clone_contents(sel);
    let root = copy.select("body");
    dom::remove(&root.select(HIDDEN_LABEL_SELECTOR));
    dom::text(&root)
}

/// Number of the highlighted page in the pager.
fn active_page(pager: &Selection) -> Option<u32> {
    dom::query_all(pager, ACTIVE_PAGE_SELECTOR)
        .iter()
        .find_map(|marker| first_number(&visible_text(marker)))
}

/// Page number carried in the listing URL's query.
fn page_from_query(page_url: &Url) -> Option<u32> {
    PAGE_QUERY_KEYS.iter().find_map(|key| {
        query_values(page_url, &[*key])
            .iter()
            .find_map(|value| value.trim().parse().ok())
    })
}

fn navigable_href(anchor: &Selection) -> Option<String> {
    dom::non_empty_attribute(anchor, "href").filter(|href| is_navigable_href(href))
}

/// Href of the link to page `target`, trying in order: a numbered anchor,
/// a "next" button by class or title, a "next" icon by `alt`, and a "next"
/// anchor text.
fn find_next_href(pager: &Selection, target: u32) -> Option<String> {
    let anchors = dom::query_all(pager, "a");

    let numbered = anchors
        .iter()
        .filter(|a| page_number(&visible_text(a)) == Some(target))
        .find_map(navigable_href);
    if numbered.is_some() {
        trace!(target, "next page found by number");
        return numbered;
    }

    let by_selector = NEXT_SELECTORS
        .iter()
        .find_map(|selector| dom::query_all(pager, selector).iter().find_map(navigable_href));
    if by_selector.is_some() {
        trace!("next page found by selector");
        return by_selector;
    }

    let by_icon = anchors
        .iter()
        .filter(|a| {
            dom::query_all(a, "img").iter().any(|img| {
                dom::get_attribute(img, "alt")
                    .is_some_and(|alt| NEXT_TEXT_MARKERS.iter().any(|m| alt.contains(m)))
            })
        })
        .find_map(navigable_href);
    if by_icon.is_some() {
        trace!("next page found by icon alt");
        return by_icon;
    }

    NEXT_TEXT_MARKERS.iter().find_map(|marker| {
        anchors
            .iter()
            .filter(|a| dom::text(a).contains(marker))
            .find_map(navigable_href)
    })
}

/// Resolve a pager href against the listing URL, carrying the listing's
/// query parameters into query-only hrefs.
fn resolve_next_url(href: &str, page_url: &Url) -> Option<String> {
    let mut resolved = resolve_href(href, page_url)?;
    if href.trim_start().starts_with('?') {
        merge_query(&mut resolved, page_url);
    }
    Some(resolved.into())
}
