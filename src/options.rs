//! Configuration options for board extraction.
//!
//! The `Options` struct controls how many posts are fetched, how they are
//! fetched, and how detail text is cleaned.

use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::extractor::sanitize::Sanitizer;

/// Configuration options for a scrape.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use board_extract::Options;
///
/// let options = Options {
///     max_posts: 10,
///     concurrency: 2,
///     ..Options::default()
/// };
/// assert_eq!(options.max_content_chars, 5000);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of listing posts whose detail pages are fetched.
    ///
    /// Default: `30`
    pub max_posts: usize,

    /// Maximum length of `DetailPost::content`, in characters.
    ///
    /// Default: `5000`
    pub max_content_chars: usize,

    /// Number of detail pages fetched at the same time.
    ///
    /// `1` keeps the fetch loop strictly sequential. `0` is treated as `1`.
    ///
    /// Default: `1`
    pub concurrency: usize,

    /// Deadline for a single detail fetch.
    ///
    /// Default: 30 seconds
    pub fetch_timeout: Duration,

    /// Date used for clock-only timestamps such as `14:05`.
    ///
    /// Default: `None` (the local calendar date at extraction time)
    pub today: Option<NaiveDate>,

    /// Text cleanup rules applied to detail content.
    ///
    /// Default: [`Sanitizer::default`]
    pub sanitizer: Sanitizer,
}

impl Options {
    /// Date that clock-only timestamps resolve to.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Worker pool size, never below one.
    #[must_use]
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_posts: 30,
            max_content_chars: 5000,
            concurrency: 1,
            fetch_timeout: Duration::from_secs(30),
            today: None,
            sanitizer: Sanitizer::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.max_posts, 30);
        assert_eq!(opts.max_content_chars, 5000);
        assert_eq!(opts.concurrency, 1);
        assert_eq!(opts.fetch_timeout, Duration::from_secs(30));
        assert!(opts.today.is_none());
        assert!(!opts.sanitizer.rules().is_empty());
    }

    #[test]
    fn test_zero_concurrency_is_sequential() {
        let opts = Options {
            concurrency: 0,
            ..Options::default()
        };
        assert_eq!(opts.effective_concurrency(), 1);
    }

    #[test]
    fn test_today_override() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1);
        let opts = Options {
            today: day,
            ..Options::default()
        };
        assert_eq!(Some(opts.today()), day);
    }
}
