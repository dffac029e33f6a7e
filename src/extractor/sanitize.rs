//! Text cleanup for extracted post bodies.
//!
//! Linearized content still carries script residue that leaked out of
//! inline handlers, and the boilerplate that public-sector CMS templates
//! print around every post. Both are removed by an ordered table of
//! pattern rules, followed by newline normalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::{LINE_WHITESPACE, MULTIPLE_NEWLINES};

/// One cleanup step: every match of `pattern` is replaced by `replacement`.
#[derive(Debug, Clone)]
pub struct SanitizeRule {
    pub name: String,
    pub pattern: Regex,
    pub replacement: String,
}

impl SanitizeRule {
    /// Compile a rule.
    ///
    /// # Errors
    /// Returns the regex error if `pattern` does not compile.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Compile a rule that deletes every match.
    ///
    /// # Errors
    /// Returns the regex error if `pattern` does not compile.
    pub fn removal(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Self::new(name, pattern, "")
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// Script fragments that survive linearization.
const SCRIPT_RESIDUE: &[(&str, &str)] = &[
    (
        "event_handler",
        r#"(?i)\bon[a-z]+\s*=\s*(?:"[^"]*"|'[^']*')"#,
    ),
    (
        "variable_assignment",
        r"(?m)^[^\S\n]*(?:var|let|const)\s+[A-Za-z_$][\w$]*\s*=[^\n]*$",
    ),
    (
        "property_assignment",
        r"(?m)^[^\S\n]*(?:window|document|location|self|top)\.[\w$.\[\]'\x22]+\s*=[^\n]*$",
    ),
    (
        "console_call",
        r"console\.(?:log|info|warn|error|debug)\s*\([^)\n]*\)\s*;?",
    ),
    (
        "function_body",
        r"function\s*[\w$]*\s*\([^)]*\)\s*\{[^{}]*\}",
    ),
    (
        "document_write",
        r"(?:document\.write(?:ln)?|alert)\s*\([^)\n]*\)\s*;?",
    ),
    (
        "markup_markers",
        r"(?://[^\S\n]*)?(?:<!\[CDATA\[|\]\]>|<!--|-->)",
    ),
];

/// CMS boilerplate printed around post bodies.
///
/// The manager footer only matches as the closing block of the text, so
/// contact lines inside a body survive.
const BOILERPLATE: &[(&str, &str)] = &[
    (
        "satisfaction_survey",
        r"(?m)^[^\n]*(?:만족도\s*조사|페이지\s*만족도|콘텐츠\s*만족도|만족하십니까|만족도\s*평가)[^\n]*$",
    ),
    (
        "satisfaction_options",
        r"(?m)^[^\S\n]*(?:매우\s*만족|만족|보통|불만족|매우\s*불만족)(?:[^\S\n]+(?:매우\s*만족|만족|보통|불만족|매우\s*불만족))+[^\S\n]*$",
    ),
    (
        "official_site_banner",
        r"이\s*누리집은\s*대한민국\s*공식\s*전자정부\s*누리집입니다\.?",
    ),
    (
        "toggle_widget",
        r"(?s)(?:공유하기|SNS\s*공유|인쇄하기|인쇄|QR\s*코드|QR코드|즐겨찾기)\s*열기.{0,200}?닫기",
    ),
    (
        "breadcrumb",
        r"(?m)^[^\S\n]*(?:HOME|Home|home|홈)[^\S\n]*(?:>|›|»|/)[^\n]*$",
    ),
    (
        "manager_footer",
        r"(?:^|\n)[^\S\n]*(?:담당부서|담당자|최종\s*수정일)[^\S\n]*[:：]?[^\n]*(?:\n[^\S\n]*(?:(?:담당부서|담당자|연락처|전화번호|최종\s*수정일)[^\S\n]*[:：]?[^\n]*)?)*$",
    ),
    (
        "trailing_navigation",
        r"(?s)(?:^|\n)[^\S\n]*(?:목록|이전글)[^\n]{0,80}\n.*다음글.*$",
    ),
];

#[allow(clippy::expect_used)]
static DEFAULT_RULES: LazyLock<Vec<SanitizeRule>> = LazyLock::new(|| {
    SCRIPT_RESIDUE
        .iter()
        .chain(BOILERPLATE)
        .map(|(name, pattern)| SanitizeRule::removal(*name, pattern).expect("default sanitize rule"))
        .collect()
});

/// Ordered rule pipeline for post bodies.
///
/// The pipeline is repeated until the text stops changing, so for rules that
/// only delete, cleaning already clean text is a no-op.
///
/// # Example
///
/// ```rust
/// use board_extract::extractor::sanitize::{SanitizeRule, Sanitizer};
///
/// let sanitizer = Sanitizer::default()
///     .with_rule(SanitizeRule::removal("ad", r"\[광고\][^\n]*").unwrap());
///
/// let text = "본문입니다.\n\n\n\n[광고] 지금 구매하세요\nconsole.log('x');";
/// assert_eq!(sanitizer.sanitize(text), "본문입니다.");
/// ```
#[derive(Debug, Clone)]
pub struct Sanitizer {
    rules: Vec<SanitizeRule>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }
}

impl Sanitizer {
    /// A sanitizer without pattern rules; only newlines are normalized.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule after the existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: SanitizeRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[SanitizeRule] {
        &self.rules
    }

    /// Clean `text`.
    #[must_use]
    pub fn sanitize(&self, text: &str) -> String {
        let mut current = self.pass(text);

        // Deleting rules shrink the text on every pass that changes it.
        for _ in 0..text.len() {
            let next = self.pass(&current);
            if next == current {
                break;
            }
            current = next;
        }

        current
    }

    fn pass(&self, text: &str) -> String {
        let mut out = self
            .rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc));

        out = out.replace("\r\n", "\n");
        out = LINE_WHITESPACE.replace_all(&out, "").into_owned();
        out = MULTIPLE_NEWLINES.replace_all(&out, "\n\n").into_owned();
        out.trim().to_string()
    }
}
