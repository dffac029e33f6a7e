//! Error types for board-extract.
//!
//! Only request-level failures surface as errors. Heuristic steps that find
//! nothing return `None` or an empty collection instead.

/// Error type for scrape operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required request field was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The target date could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The URL is not an absolute http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP request failed before a response was received.
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// The HTTP client could not be configured.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The fetch did not finish within the configured deadline.
    #[error("timed out fetching {url}")]
    Timeout { url: String },
}

/// Result type alias for scrape operations.
pub type Result<T> = std::result::Result<T, Error>;
