//! Compiled regex patterns for listing and detail extraction.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by their purpose in the extraction pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Date Recognition Patterns
// =============================================================================

/// Absolute date anywhere in the text: `2024-05-01`, `2024.05.01`.
pub static DATE_ABSOLUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})[-.](\d{2})[-.](\d{2})").expect("DATE_ABSOLUTE regex")
});

/// Clock time occupying the whole string: `09:30`, `23:59:59`.
///
/// Anchored so digit pairs inside unrelated text never read as "today".
pub static CLOCK_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[01]?\d|2[0-3]):[0-5]\d(?::[0-5]\d)?$").expect("CLOCK_ONLY regex")
});

// =============================================================================
// Title Quality Patterns
// =============================================================================

/// Text made only of punctuation, symbols and whitespace.
pub static PUNCT_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\p{P}\p{S}]*$").expect("PUNCT_ONLY regex")
});

/// Punctuation, numbers, dates and times; never a post title.
pub static PUNCT_OR_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\p{P}\p{S}\d]*$").expect("PUNCT_OR_NUMERIC regex")
});

/// Metadata cells such as `조회 123` or `Views: 42`.
pub static META_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:작성자|글쓴이|등록자|작성일|등록일|게시일|조회수?|추천수?|hits?|views?|date|writer|author)\s*[:：]?\s*[\d,.\-]*$",
    )
    .expect("META_LABEL regex")
});

/// Metadata fields stripped from a row's full text when recovering a title.
///
/// Applied in order; each match is replaced with a single space.
pub static META_FIELDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:작성자|글쓴이|등록자|작성부서|담당부서|부서명?)\s*[:：]?\s*\S+",
        r"(?:작성일|등록일|게시일|수정일|날짜)\s*[:：]?",
        r"(?i)(?:조회수?|추천수?|hits?|views?)\s*[:：]?\s*[\d,]*",
        r"\d{4}[-./]\d{1,2}[-./]\d{1,2}\.?",
        r"\b\d{1,2}:\d{2}(?::\d{2})?\b",
        r"(?i)(?:공유하기|페이스북|트위터|카카오톡|카카오스토리|네이버\s*블로그|밴드|URL\s*복사|share|facebook|twitter)",
        r"(?:첨부파일|파일첨부|새글|\bNEW\b|\bnew\b)",
        r"^\s*\d+\s+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("META_FIELDS regex"))
    .collect()
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches leading/trailing whitespace on lines.
pub static LINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[^\S\n]+|[^\S\n]+$").expect("LINE_WHITESPACE regex")
});

/// Matches multiple consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex")
});

/// Collapses every whitespace run to one space and trims the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}
