//! Date recognition for listing rows.
//!
//! Board listings print post dates either as absolute dates or, for posts
//! made today, as a bare clock time. Both forms anchor a row.

use chrono::NaiveDate;

use crate::patterns::{CLOCK_ONLY, DATE_ABSOLUTE};

/// Recognize a calendar date in a text fragment.
///
/// Tries, in order:
/// 1. an absolute `YYYY-MM-DD` / `YYYY.MM.DD` date anywhere in the text;
/// 2. a clock time `HH:MM[:SS]` that is the entire trimmed text, read as `today`.
///
/// Returns `None` for anything else, including impossible calendar values.
///
/// # Example
///
/// ```rust
/// use board_extract::date::recognize_date;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// assert_eq!(recognize_date("2024.05.01", today), NaiveDate::from_ymd_opt(2024, 5, 1));
/// assert_eq!(recognize_date(" 14:05 ", today), Some(today));
/// assert_eq!(recognize_date("조회 14:05", today), None);
/// ```
#[must_use]
pub fn recognize_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = DATE_ABSOLUTE.captures(text) {
        let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
        let month = caps.get(2)?.as_str().parse::<u32>().ok()?;
        let day = caps.get(3)?.as_str().parse::<u32>().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    if CLOCK_ONLY.is_match(text) {
        return Some(today);
    }

    None
}

/// Parse a request date. Accepts `YYYY-MM-DD` optionally followed by a time
/// part (`2024-05-01T09:00:00Z`).
#[must_use]
pub fn parse_request_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let head = value.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
