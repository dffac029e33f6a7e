//! # board-extract
//!
//! Heuristic post extraction for bulletin boards and CMS listings.
//!
//! Given the URL of an unknown board's listing page, this library finds the
//! posts on it (title, link, date) without site-specific configuration,
//! resolves the next listing page, and extracts each post's body text,
//! images and attachments.
//!
//! ## Quick Start
//!
//! ```rust
//! use board_extract::{extract_listing, listing::DateFilter, Options};
//! use chrono::NaiveDate;
//! use url::Url;
//!
//! let html = r#"<table>
//!   <tr><td><a href="view.do?id=2">하계 휴관 안내</a></td><td>2024.05.02</td></tr>
//!   <tr><td><a href="view.do?id=1">지난 공지</a></td><td>2024.03.15</td></tr>
//! </table>
//! <div class="paging"><strong>1</strong><a href="?pageIndex=2">2</a></div>"#;
//!
//! let url = Url::parse("https://example.go.kr/board/list.do?bbsId=7").unwrap();
//! let filter = DateFilter::since(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
//!
//! let listing = extract_listing(html, &url, &filter, &Options::default());
//! assert_eq!(listing.posts.len(), 1);
//! assert_eq!(listing.posts[0].link, "https://example.go.kr/board/view.do?id=2");
//! assert!(listing.pagination.next_url.unwrap().contains("bbsId=7"));
//! ```
//!
//! ## Features
//!
//! - **Date-anchored listings**: rows are found through the dates printed on them
//! - **Link ranking**: the most descriptive anchor of a row becomes its title
//! - **Pagination**: next-page links, keeping the board's query parameters
//! - **Detail extraction**: cleaned body text, content images, attachments
//! - **Bounded fetching**: sequential by default, per-fetch deadlines, isolated failures

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Selector infrastructure and site knowledge tables.
pub mod selector;

/// Date recognition for listing rows and requests.
pub mod date;

/// Listing page extraction (row detection, link ranking, title recovery).
pub mod listing;

/// Next-page resolution.
pub mod pagination;

/// Detail page extraction (content, sanitizing, media).
pub mod extractor;

/// Page fetching capability and its HTTP implementation.
pub mod fetch;

/// Detail page retrieval over a bounded runner.
pub mod detail;

/// Request validation and orchestration.
pub mod scrape;

/// URL utilities for resolution, query merging and file detection.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{Fetcher, HttpFetcher, RawDocument};
pub use options::Options;
pub use result::{
    DetailPost, FileAttachment, Listing, PaginationState, PostSummary, ScrapeOutcome,
    ScrapeRequest, ScrapeResponse,
};
pub use scrape::{fetch_listing, scrape};

use url::Url;

use crate::listing::DateFilter;

/// Extracts posts and pagination from a listing page the caller fetched.
///
/// # Arguments
///
/// * `html` - The listing document
/// * `page_url` - URL the document was served from; links resolve against it
/// * `filter` - Accepted post dates
/// * `options` - `today` is used for clock-only timestamps
#[must_use]
pub fn extract_listing(html: &str, page_url: &Url, filter: &DateFilter, options: &Options) -> Listing {
    listing_from_html(html, page_url, page_url, filter, options)
}

/// Post links resolve against `base_url`, where the document was served
/// from. The pager is read against `listing_url`, the URL that was asked
/// for, whose query identifies the board even when a redirect dropped it.
pub(crate) fn listing_from_html(
    html: &str,
    base_url: &Url,
    listing_url: &Url,
    filter: &DateFilter,
    options: &Options,
) -> Listing {
    let doc = dom::parse(html);
    Listing {
        posts: listing::extract_posts(&doc, base_url, filter, options.today()),
        pagination: pagination::resolve_pagination(&doc, listing_url),
    }
}

/// Extracts a post's body, images and attachments from a detail page the
/// caller fetched.
///
/// # Example
///
/// ```rust
/// use board_extract::{extract_detail, Options, PostSummary};
/// use chrono::NaiveDate;
/// use url::Url;
///
/// let summary = PostSummary {
///     title: "하계 휴관 안내".to_string(),
///     link: "https://example.go.kr/board/view.do?id=2".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
/// };
/// let html = r#"<div class="view_cont"><p>7월 1일부터 휴관합니다.</p></div>"#;
/// let url = Url::parse(&summary.link).unwrap();
///
/// let post = extract_detail(html, &url, summary, &Options::default());
/// assert_eq!(post.content, "7월 1일부터 휴관합니다.");
/// ```
#[must_use]
pub fn extract_detail(html: &str, page_url: &Url, summary: PostSummary, options: &Options) -> DetailPost {
    detail::detail_from_html(html, page_url, summary, options)
}
