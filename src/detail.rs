//! Detail page retrieval for listing posts.
//!
//! Each selected post becomes one task (fetch, then extract) and the tasks
//! are driven by an ordered, bounded runner. A post whose fetch fails or
//! times out is logged and left out; the others are unaffected.

use futures::future;
use futures::stream::{self, StreamExt};
use tracing::{info, warn};
use url::Url;

use crate::dom;
use crate::extractor::extract_post_body;
use crate::fetch::Fetcher;
use crate::result::{DetailPost, PostSummary};
use crate::Options;

/// Fetch and extract the detail pages of the first `options.max_posts`
/// posts, keeping listing order.
///
/// Up to `options.concurrency` fetches run at once.
pub async fn fetch_details<F>(fetcher: &F, posts: &[PostSummary], options: &Options) -> Vec<DetailPost>
where
    F: Fetcher + ?Sized,
{
    let selected = posts.len().min(options.max_posts);
    info!(
        posts = selected,
        concurrency = options.effective_concurrency(),
        "fetching detail pages"
    );

    let tasks = posts
        .iter()
        .take(options.max_posts)
        .cloned()
        .map(|summary| fetch_detail(fetcher, summary, options));

    let details: Vec<DetailPost> = stream::iter(tasks)
        .buffered(options.effective_concurrency())
        .filter_map(future::ready)
        .collect()
        .await;

    if details.len() < selected {
        warn!(
            requested = selected,
            extracted = details.len(),
            "some detail pages were skipped"
        );
    }
    details
}

async fn fetch_detail<F>(fetcher: &F, summary: PostSummary, options: &Options) -> Option<DetailPost>
where
    F: Fetcher + ?Sized,
{
    let url = match Url::parse(&summary.link) {
        Ok(url) => url,
        Err(e) => {
            warn!(link = %summary.link, error = %e, "unparseable post link; skipping post");
            return None;
        }
    };

    let raw = match tokio::time::timeout(options.fetch_timeout, fetcher.fetch(&url)).await {
        Ok(Ok(raw)) => raw,
        Ok(Err(e)) => {
            warn!(url = %url, error = %e, "detail fetch failed; skipping post");
            return None;
        }
        Err(_) => {
            warn!(url = %url, timeout = ?options.fetch_timeout, "detail fetch timed out; skipping post");
            return None;
        }
    };

    Some(detail_from_html(&raw.html, &raw.base_url, summary, options))
}

/// Build a [`DetailPost`] from an already fetched detail page.
#[must_use]
pub fn detail_from_html(
    html: &str,
    page_url: &Url,
    summary: PostSummary,
    options: &Options,
) -> DetailPost {
    let doc = dom::parse(html);
    let body = extract_post_body(&doc, page_url, options);

    DetailPost {
        summary,
        content: truncate_chars(&body.content, options.max_content_chars),
        images: body.images,
        files: body.files,
    }
}

/// First `max` characters of `text`.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
