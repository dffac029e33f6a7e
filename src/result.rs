//! Result types for extraction output.
//!
//! These records are the crate's whole output surface. They are plain data
//! and serialize to the JSON shape downstream tooling consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One post found on a listing page.
///
/// Within one listing result no two summaries share a `link` or a `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Visible title chosen for the row.
    pub title: String,

    /// Absolute URL of the post's detail page.
    pub link: String,

    /// First date recognized on the row (serialized as `YYYY-MM-DD`).
    pub date: NaiveDate,
}

/// A downloadable attachment of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    /// Display name (anchor text, `title` attribute, or URL filename).
    pub name: String,

    /// Absolute download URL.
    pub url: String,
}

/// A post with its detail page contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPost {
    #[serde(flatten)]
    pub summary: PostSummary,

    /// Cleaned body text, truncated to `Options::max_content_chars`.
    pub content: String,

    /// Content image URLs without duplicates.
    pub images: Vec<String>,

    /// Attachments without duplicate URLs.
    pub files: Vec<FileAttachment>,
}

/// Pager state derived from one listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Page number the listing is currently showing.
    pub current_page: u32,

    /// Absolute URL of the following page, if one could be resolved.
    pub next_url: Option<String>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            next_url: None,
        }
    }
}

/// Posts and pager state extracted from one listing document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub posts: Vec<PostSummary>,
    pub pagination: PaginationState,
}

/// A scrape request as received from the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeRequest {
    /// Listing page URL.
    pub url: String,

    /// Earliest accepted post date (ISO, `YYYY-MM-DD` prefix).
    pub date: String,

    /// Latest accepted post date, inclusive.
    #[serde(default, rename = "dateEnd", skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
}

/// Successful scrape output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub posts: Vec<DetailPost>,

    #[serde(rename = "nextPageURL")]
    pub next_page_url: Option<String>,
}

/// Response body of one scrape: the response itself, or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScrapeOutcome {
    Success(ScrapeResponse),
    Failure { error: String },
}

impl From<crate::Result<ScrapeResponse>> for ScrapeOutcome {
    fn from(result: crate::Result<ScrapeResponse>) -> Self {
        match result {
            Ok(response) => Self::Success(response),
            Err(e) => Self::Failure {
                error: e.to_string(),
            },
        }
    }
}
