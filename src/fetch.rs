//! Page fetching.
//!
//! Extraction never performs I/O itself; it works on [`RawDocument`]s
//! produced by a [`Fetcher`]. [`HttpFetcher`] is the reqwest-backed
//! implementation, and tests supply in-memory fetchers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};
use url::Url;

use crate::encoding::transcode_to_utf8;
use crate::error::{Error, Result};

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Markup, transcoded to UTF-8.
    pub html: String,

    /// Final URL after redirects; relative links resolve against it.
    pub base_url: Url,
}

impl RawDocument {
    pub fn new(html: impl Into<String>, base_url: Url) -> Self {
        Self {
            html: html.into(),
            base_url,
        }
    }
}

/// Source of listing and detail pages.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch one page.
    async fn fetch(&self, url: &Url) -> Result<RawDocument>;
}

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; board-extract/0.1)";

/// HTTP fetcher with a request timeout and an optional pause between
/// requests.
///
/// # Example
///
/// ```rust,ignore
/// use board_extract::fetch::{Fetcher, HttpFetcher};
/// use std::time::Duration;
///
/// let fetcher = HttpFetcher::builder()
///     .timeout(Duration::from_secs(10))
///     .delay(Duration::from_millis(500))
///     .build()?;
/// let page = fetcher.fetch(&"https://example.com/board/list.do".parse()?).await?;
/// ```
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl HttpFetcher {
    /// Fetcher with default settings.
    ///
    /// # Errors
    /// Returns [`Error::Client`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> HttpFetcherBuilder {
        HttpFetcherBuilder::default()
    }

    /// Fetcher around a preconfigured client, without a request delay.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            delay: Duration::ZERO,
            last_request: Mutex::new(None),
        }
    }

    /// Sleep until `delay` has passed since the previous request.
    async fn wait_turn(&self) {
        if self.delay.is_zero() {
            return;
        }

        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.delay {
                tokio::time::sleep(self.delay - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<RawDocument> {
        self.wait_turn().await;

        debug!(url = %url, "HTTP fetch starting");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            request_error(url, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let base_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await.map_err(|e| request_error(url, e))?;
        let html = transcode_to_utf8(&bytes, content_type.as_deref());
        debug!(url = %base_url, bytes = bytes.len(), "HTTP fetch complete");

        Ok(RawDocument { html, base_url })
    }
}

fn request_error(url: &Url, e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout {
            url: url.to_string(),
        }
    } else {
        Error::Http {
            url: url.to_string(),
            source: Box::new(e),
        }
    }
}

/// Builder for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct HttpFetcherBuilder {
    user_agent: String,
    timeout: Duration,
    delay: Duration,
}

impl Default for HttpFetcherBuilder {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            delay: Duration::ZERO,
        }
    }
}

impl HttpFetcherBuilder {
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Whole-request timeout, including reading the body.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Minimum pause between the starts of consecutive requests.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// # Errors
    /// Returns [`Error::Client`] if the HTTP client cannot be built.
    pub fn build(self) -> Result<HttpFetcher> {
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(HttpFetcher {
            client,
            delay: self.delay,
            last_request: Mutex::new(None),
        })
    }
}
