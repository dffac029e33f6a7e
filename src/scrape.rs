//! Request-level orchestration: validate, fetch the listing, extract posts
//! and the next-page URL, then fetch the posts' detail pages.

use tracing::info;
use url::Url;

use crate::date::parse_request_date;
use crate::detail::fetch_details;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::listing::DateFilter;
use crate::result::{Listing, ScrapeRequest, ScrapeResponse};
use crate::url_utils::parse_url;
use crate::{listing_from_html, Options};

/// Check a request and turn it into a listing URL and date window.
///
/// # Errors
/// [`Error::MissingField`] for an empty `url` or `date`,
/// [`Error::InvalidDate`] for an unparseable `date` or `date_end`, and
/// [`Error::InvalidUrl`] for anything but an absolute http(s) URL.
pub fn validate_request(request: &ScrapeRequest) -> Result<(Url, DateFilter)> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(Error::MissingField("url"));
    }
    let date = request.date.trim();
    if date.is_empty() {
        return Err(Error::MissingField("date"));
    }

    let start = parse_request_date(date).ok_or_else(|| Error::InvalidDate(date.to_string()))?;
    let mut filter = DateFilter::since(start);

    if let Some(end) = request.date_end.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        let end = parse_request_date(end).ok_or_else(|| Error::InvalidDate(end.to_string()))?;
        filter = filter.until(end);
    }

    let url = parse_url(url).ok_or_else(|| Error::InvalidUrl(url.to_string()))?;
    Ok((url, filter))
}

/// Validate a request, fetch its listing page and extract it.
///
/// # Errors
/// Validation errors from [`validate_request`], and the listing fetch's
/// [`Error::Http`], [`Error::HttpStatus`] or [`Error::Timeout`].
pub async fn fetch_listing<F>(fetcher: &F, request: &ScrapeRequest, options: &Options) -> Result<Listing>
where
    F: Fetcher + ?Sized,
{
    let (url, filter) = validate_request(request)?;
    info!(url = %url, start = %filter.start, end = ?filter.end, "scrape starting");

    let raw = tokio::time::timeout(options.fetch_timeout, fetcher.fetch(&url))
        .await
        .map_err(|_| Error::Timeout {
            url: url.to_string(),
        })??;

    let listing = listing_from_html(&raw.html, &raw.base_url, &url, &filter, options);
    info!(
        posts = listing.posts.len(),
        next = ?listing.pagination.next_url,
        "listing extracted"
    );
    Ok(listing)
}

/// Run one scrape.
///
/// A listing that cannot be fetched fails the whole request. Detail pages
/// that cannot be fetched only drop their post.
///
/// # Errors
/// Same as [`fetch_listing`].
pub async fn scrape<F>(fetcher: &F, request: &ScrapeRequest, options: &Options) -> Result<ScrapeResponse>
where
    F: Fetcher + ?Sized,
{
    let listing = fetch_listing(fetcher, request, options).await?;
    let posts = fetch_details(fetcher, &listing.posts, options).await;

    Ok(ScrapeResponse {
        posts,
        next_page_url: listing.pagination.next_url,
    })
}
