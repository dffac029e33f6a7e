//! Listing page extraction.
//!
//! Posts are found through their dates: every element whose own text reads
//! as a date anchors the row that encloses it (`tr`, `li`, list-item or
//! container `div`, `dl`). The row's anchors are ranked for a title and
//! link, with title recovery for rows whose anchors carry no label. Rows
//! outside the date window are dropped and the rest de-duplicated by link
//! and by title, first occurrence winning.

use std::collections::HashSet;

use chrono::NaiveDate;
use dom_query::{Document, Selection};
use tracing::{debug, trace};
use url::Url;

use crate::date::recognize_date;
use crate::dom;
use crate::result::PostSummary;
use crate::selector::content::SILENT_TAGS;
use crate::selector::listing::{needs_parent_anchors, ROW_RULES};
use crate::selector::matches_any;

pub mod ranker;
pub mod title;

use ranker::rank_anchors;
use title::recover_title;

/// Inclusive date window applied to listing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    /// Earliest accepted date.
    pub start: NaiveDate,

    /// Latest accepted date, if bounded.
    pub end: Option<NaiveDate>,
}

impl DateFilter {
    /// Accept every date on or after `start`.
    #[must_use]
    pub fn since(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Also reject dates after `end`.
    #[must_use]
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Check whether `date` falls inside the window.
    #[must_use]
    pub fn accepts(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.is_none_or(|end| date <= end)
    }
}

/// Extract post summaries from a parsed listing document.
///
/// `base` resolves relative links; `today` is the date clock-only
/// timestamps stand for.
#[must_use]
pub fn extract_posts(
    doc: &Document,
    base: &Url,
    filter: &DateFilter,
    today: NaiveDate,
) -> Vec<PostSummary> {
    let mut seen_rows = HashSet::new();
    let mut seen_links: HashSet<String> = HashSet::new();
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut posts = Vec::new();

    for element in dom::query_all(&doc.select("body"), "*") {
        if dom::is_one_of_tags(&element, SILENT_TAGS) {
            continue;
        }

        let Some(date) = recognize_date(&dom::own_text(&element), today) else {
            continue;
        };
        let Some(row) = dom::closest(&element, |s| matches_any(s, ROW_RULES)) else {
            continue;
        };
        let Some(row_id) = dom::node_id(&row) else {
            continue;
        };
        if !seen_rows.insert(row_id) {
            continue;
        }

        if !filter.accepts(date) {
            trace!(%date, "row outside date window");
            continue;
        }

        let Some((title, link)) = resolve_post(&row, base) else {
            debug!(%date, "dated row without a usable title or link");
            continue;
        };

        let link = String::from(link);
        if seen_links.contains(&link) || seen_titles.contains(&title) {
            trace!(%link, "duplicate post");
            continue;
        }
        seen_links.insert(link.clone());
        seen_titles.insert(title.clone());

        posts.push(PostSummary { title, link, date });
    }

    debug!(count = posts.len(), "listing posts extracted");
    posts
}

/// Anchors considered for a row. Rows without anchors, and narrow rows
/// whose link usually sits beside them, borrow their parent's anchors.
fn row_anchors<'a>(row: &Selection<'a>) -> Vec<Selection<'a>> {
    let own = dom::query_all(row, "a");
    if own.is_empty() || needs_parent_anchors(row) {
        if let Some(parent) = dom::parent_element(row) {
            return dom::query_all(&parent, "a");
        }
    }
    own
}

/// Title and absolute link of one row.
fn resolve_post(row: &Selection, base: &Url) -> Option<(String, Url)> {
    let ranked = rank_anchors(&row_anchors(row), base);
    if let Some(best) = ranked.best {
        return Some(best);
    }

    let link = ranked.fallback_link?;
    let title = recover_title(row)?;
    Some((title, link))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn extract(html: &str, filter: DateFilter) -> Vec<PostSummary> {
        let doc = dom::parse(html);
        let base = Url::parse("https://example.com/board/list.do").unwrap();
        extract_posts(&doc, &base, &filter, ymd(2024, 6, 3))
    }

    const TABLE: &str = r#"
        <table><tbody>
            <tr><td>3</td><td><a href="view.do?id=3">세 번째 공지</a></td><td>2024-06-01</td></tr>
            <tr><td>2</td><td><a href="view.do?id=2">두 번째 공지</a></td><td>2024-05-01</td></tr>
            <tr><td>1</td><td><a href="view.do?id=1">첫 번째 공지</a></td><td>2024-03-01</td></tr>
        </tbody></table>
    "#;

    #[test]
    fn test_date_filter() {
        let filter = DateFilter::since(ymd(2024, 5, 1)).until(ymd(2024, 5, 31));
        assert!(filter.accepts(ymd(2024, 5, 1)));
        assert!(filter.accepts(ymd(2024, 5, 31)));
        assert!(!filter.accepts(ymd(2024, 4, 30)));
        assert!(!filter.accepts(ymd(2024, 6, 1)));
        assert!(DateFilter::since(ymd(2024, 5, 1)).accepts(ymd(2099, 1, 1)));
    }

    #[test]
    fn test_table_rows() {
        let posts = extract(TABLE, DateFilter::since(ymd(2024, 4, 1)));
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "세 번째 공지");
        assert_eq!(posts[0].link, "https://example.com/board/view.do?id=3");
        assert_eq!(posts[0].date, ymd(2024, 6, 1));
        assert_eq!(posts[1].title, "두 번째 공지");
    }

    #[test]
    fn test_date_end_bounds_window() {
        let filter = DateFilter::since(ymd(2024, 1, 1)).until(ymd(2024, 5, 15));
        let titles: Vec<String> = extract(TABLE, filter).into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["두 번째 공지", "첫 번째 공지"]);
    }

    #[test]
    fn test_clock_time_is_today() {
        let html = r#"<ul><li><a href="/n/9">오늘 올라온 글</a><span>10:42</span></li></ul>"#;
        let posts = extract(html, DateFilter::since(ymd(2024, 6, 3)));
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].date, ymd(2024, 6, 3));
    }

    #[test]
    fn test_first_date_in_row_wins() {
        let html = r#"<table><tr><td><a href="v?id=1">행사 안내</a></td><td>2024-01-01</td><td>2024-06-01</td></tr></table>"#;
        let posts = extract(html, DateFilter::since(ymd(2024, 5, 1)));
        assert!(posts.is_empty());
    }

    #[test]
    fn test_duplicates_removed_by_link_or_title() {
        let html = r#"
            <ul>
                <li><a href="v?id=1">같은 제목</a> 2024-05-01</li>
                <li><a href="v?id=2">같은 제목</a> 2024-05-02</li>
                <li><a href="v?id=1">다른 제목</a> 2024-05-03</li>
                <li><a href="v?id=4">고유한 제목</a> 2024-05-04</li>
            </ul>
        "#;
        let posts = extract(html, DateFilter::since(ymd(2024, 1, 1)));
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["같은 제목", "고유한 제목"]);
    }

    #[test]
    fn test_definition_list_borrows_parent_anchor() {
        let html = r#"
            <ul class="gallery">
                <li>
                    <a href="/photo/7"><img src="/thumb/7.jpg" alt=""></a>
                    <dl><dt>봄꽃 축제 사진</dt><dd>2024.05.10</dd></dl>
                </li>
            </ul>
        "#;
        let posts = extract(html, DateFilter::since(ymd(2024, 5, 1)));
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "봄꽃 축제 사진");
        assert_eq!(posts[0].link, "https://example.com/photo/7");
    }

    #[test]
    fn test_row_without_link_is_skipped() {
        let html = r#"<table><tr><td>링크 없는 글</td><td>2024-05-01</td></tr></table>"#;
        assert!(extract(html, DateFilter::since(ymd(2024, 1, 1))).is_empty());
    }

    #[test]
    fn test_dates_outside_rows_are_ignored() {
        let html = r#"<div><p>2024-05-01</p><a href="/x">기사</a></div>"#;
        assert!(extract(html, DateFilter::since(ymd(2024, 1, 1))).is_empty());
    }
}
