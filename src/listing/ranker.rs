//! Title and link selection among a row's anchors.

use dom_query::Selection;
use url::Url;

use crate::dom;
use crate::patterns::PUNCT_ONLY;
use crate::url_utils::resolve_href;

/// Outcome of ranking one row's anchors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedLink {
    /// Best (title, link) pair, when some anchor carries a usable label.
    pub best: Option<(String, Url)>,

    /// First navigable link of the row, used by the title fallbacks.
    pub fallback_link: Option<Url>,
}

/// Usable as a title: more than one character and not only punctuation.
fn is_usable_label(text: &str) -> bool {
    text.chars().count() > 1 && !PUNCT_ONLY.is_match(text)
}

/// Label of an icon-only anchor: the first `img alt`, else the anchor's
/// `title` attribute.
fn image_label(anchor: &Selection) -> Option<String> {
    dom::query_all(anchor, "img")
        .iter()
        .find_map(|img| dom::non_empty_attribute(img, "alt"))
        .or_else(|| dom::non_empty_attribute(anchor, "title"))
        .map(|label| crate::patterns::normalize_whitespace(&label))
}

/// Pick the best title and link among `anchors`.
///
/// Anchors whose visible text is usable compete on length and the longest
/// wins; on equal length the earlier anchor is kept. Only when no anchor has
/// usable text is an image `alt` or `title` attribute considered.
///
/// # Example
///
/// ```rust
/// use board_extract::{dom, listing::ranker::rank_anchors};
/// use url::Url;
///
/// let doc = dom::parse(r#"<tr><td><a href="/v?id=1">새글</a> <a href="/v?id=1">2024년 상반기 채용 공고</a></td></tr>"#);
/// let anchors = dom::query_all(&doc.select("tr"), "a");
/// let base = Url::parse("https://example.com/list").unwrap();
///
/// let ranked = rank_anchors(&anchors, &base);
/// assert_eq!(ranked.best.map(|(title, _)| title), Some("2024년 상반기 채용 공고".to_string()));
/// ```
#[must_use]
pub fn rank_anchors(anchors: &[Selection], base: &Url) -> RankedLink {
    let mut fallback_link: Option<Url> = None;
    let mut by_text: Option<(String, Url)> = None;
    let mut by_image: Option<(String, Url)> = None;

    for anchor in anchors {
        let Some(link) = dom::get_attribute(anchor, "href").and_then(|h| resolve_href(&h, base))
        else {
            continue;
        };

        if fallback_link.is_none() {
            fallback_link = Some(link.clone());
        }

        let text = dom::text(anchor);
        if is_usable_label(&text) {
            let longer = by_text
                .as_ref()
                .is_none_or(|(best, _)| text.chars().count() > best.chars().count());
            if longer {
                by_text = Some((text, link));
            }
            continue;
        }

        if by_image.is_none() {
            if let Some(label) = image_label(anchor).filter(|l| is_usable_label(l)) {
                by_image = Some((label, link));
            }
        }
    }

    RankedLink {
        best: by_text.or(by_image),
        fallback_link,
    }
}
