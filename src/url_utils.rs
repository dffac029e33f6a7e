//! URL Utility Functions
//!
//! Link validation, resolution against a page URL, query merging for
//! query-only pager links, and the query inspections used to classify
//! attachment URLs.

use url::Url;

/// Parse a string into an absolute http(s) URL.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL with a host, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let s = url_str.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// Check whether an `href` leads to another document.
///
/// Empty values, fragment-only links and `javascript:`, `mailto:`, `tel:`
/// and `data:` URLs do not.
#[must_use]
pub fn is_navigable_href(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return false;
    }

    let lower = href.to_ascii_lowercase();
    !["javascript:", "mailto:", "tel:", "data:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

/// Resolve an `href` against the page it appeared on.
///
/// # Returns
/// * The absolute URL, or `None` when the href is not navigable or cannot be joined
#[must_use]
pub fn resolve_href(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();
    if !is_navigable_href(href) {
        return None;
    }
    base.join(href).ok()
}

/// Carry `original`'s query parameters into `resolved`.
///
/// The result holds every key of both queries. For a key present in both,
/// `resolved`'s value wins. Keys only in `original` keep their original
/// order and come first.
///
/// # Example
/// ```
/// use board_extract::url_utils::merge_query;
/// use url::Url;
///
/// let original = Url::parse("https://example.com/list.do?cbIdx=57&pageIndex=1").unwrap();
/// let mut next = original.join("?pageIndex=2").unwrap();
/// merge_query(&mut next, &original);
/// assert_eq!(next.query(), Some("cbIdx=57&pageIndex=2"));
/// ```
pub fn merge_query(resolved: &mut Url, original: &Url) {
    let fresh: Vec<(String, String)> = resolved.query_pairs().into_owned().collect();

    let mut merged: Vec<(String, String)> = original
        .query_pairs()
        .into_owned()
        .filter(|(key, _)| !fresh.iter().any(|(fresh_key, _)| fresh_key == key))
        .collect();
    merged.extend(fresh);

    if merged.is_empty() {
        resolved.set_query(None);
        return;
    }

    resolved.query_pairs_mut().clear().extend_pairs(&merged);
}

/// Values of the query parameters named in `keys` (ASCII case-insensitive).
#[must_use]
pub fn query_values(url: &Url, keys: &[&str]) -> Vec<String> {
    url.query_pairs()
        .filter(|(key, value)| {
            !value.is_empty() && keys.iter().any(|k| k.eq_ignore_ascii_case(key))
        })
        .map(|(_, value)| value.into_owned())
        .collect()
}

/// Check whether a file name ends with one of `extensions`.
#[must_use]
pub fn name_has_extension(name: &str, extensions: &[&str]) -> bool {
    let Some((stem, ext)) = name.trim().rsplit_once('.') else {
        return false;
    };
    !stem.is_empty() && extensions.iter().any(|e| ext.eq_ignore_ascii_case(e))
}

/// Check whether a URL names a file with one of `extensions`, either as the
/// last path segment or as a query value (`download.do?file=report.pdf`).
#[must_use]
pub fn has_extension(url: &Url, extensions: &[&str]) -> bool {
    let in_path = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .is_some_and(|last| name_has_extension(last, extensions));

    in_path || url.query_pairs().any(|(_, value)| name_has_extension(&value, extensions))
}

/// Extract filename from a URL, stripping query parameters and fragments.
///
/// # Returns
/// * The filename portion of the URL path, or empty string if none found
///
/// # Examples
/// ```
/// use board_extract::url_utils::extract_filename;
///
/// assert_eq!(extract_filename("https://example.com/files/report.pdf"), "report.pdf");
/// assert_eq!(extract_filename("https://example.com/files/report.pdf?v=123"), "report.pdf");
/// assert_eq!(extract_filename("/path/to/image.png#section"), "image.png");
/// assert_eq!(extract_filename("https://example.com/"), "");
/// ```
#[must_use]
pub fn extract_filename(url: &str) -> String {
    let url = url.trim();

    if url.is_empty() {
        return String::new();
    }

    // Strip query parameters
    let without_query = url.split('?').next().unwrap_or(url);

    // Strip fragment identifiers
    let without_fragment = without_query.split('#').next().unwrap_or(without_query);

    // Get the last path segment
    let filename = without_fragment.rsplit('/').next().unwrap_or("").trim();

    // Don't return empty-looking filenames
    if filename.is_empty() || filename == "." || filename == ".." {
        return String::new();
    }

    filename.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_parse_url() {
        assert!(parse_url("https://example.com/path").is_some());
        assert!(parse_url("  http://example.com  ").is_some());
        assert!(parse_url("/relative/path").is_none());
        assert!(parse_url("ftp://example.com").is_none());
        assert!(parse_url("").is_none());
    }

    #[test]
    fn test_is_navigable_href() {
        assert!(is_navigable_href("/view?id=1"));
        assert!(is_navigable_href("view.do?nttId=3"));
        assert!(!is_navigable_href("#"));
        assert!(!is_navigable_href("#none"));
        assert!(!is_navigable_href("JavaScript:fn_view('1')"));
        assert!(!is_navigable_href("mailto:a@b.c"));
        assert!(!is_navigable_href("   "));
    }

    #[test]
    fn test_resolve_href() {
        let base = url("https://example.com/board/list.do?bbsId=1");
        assert_eq!(
            resolve_href("view.do?nttId=3", &base).map(|u| u.to_string()),
            Some("https://example.com/board/view.do?nttId=3".to_string())
        );
        assert_eq!(
            resolve_href("/view?id=1", &base).map(|u| u.to_string()),
            Some("https://example.com/view?id=1".to_string())
        );
        assert!(resolve_href("javascript:void(0)", &base).is_none());
    }

    #[test]
    fn test_merge_query_keeps_persistent_ids() {
        let original = url("https://example.go.kr/board/list.do?cbIdx=57");
        let mut next = original.join("?pageIndex=2").unwrap();
        merge_query(&mut next, &original);

        let pairs: Vec<(String, String)> = next.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("cbIdx".to_string(), "57".to_string())));
        assert!(pairs.contains(&("pageIndex".to_string(), "2".to_string())));
        assert_eq!(next.path(), "/board/list.do");
    }

    #[test]
    fn test_merge_query_new_values_win() {
        let original = url("https://example.com/list?page=1&id=board");
        let mut next = original.join("?page=2").unwrap();
        merge_query(&mut next, &original);
        assert_eq!(next.query(), Some("id=board&page=2"));
    }

    #[test]
    fn test_query_values_ignore_key_case() {
        let u = url("https://example.com/down.do?FileNo=7&atchFileId=A&fileno=");
        assert_eq!(query_values(&u, &["fileno"]), vec!["7".to_string()]);
        assert!(query_values(&u, &["idx"]).is_empty());
    }

    #[test]
    fn test_has_extension() {
        let docs = &["pdf", "hwp"];
        assert!(has_extension(&url("https://example.com/files/a.PDF"), docs));
        assert!(has_extension(&url("https://example.com/download.do?file=report.hwp"), docs));
        assert!(!has_extension(&url("https://example.com/download.do?fileNo=3"), docs));
        assert!(!has_extension(&url("https://example.com/pdf"), docs));
    }

    #[test]
    fn test_name_has_extension() {
        assert!(name_has_extension("보고서.pdf", &["pdf"]));
        assert!(!name_has_extension(".pdf", &["pdf"]));
        assert!(!name_has_extension("보고서", &["pdf"]));
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename(""), "");
        assert_eq!(extract_filename("https://example.com/"), "");
        assert_eq!(extract_filename("https://example.com/path/"), "");
        assert_eq!(extract_filename("https://example.com/.."), "");
        assert_eq!(extract_filename("https://example.com/a/b/c.hwp?x=1#top"), "c.hwp");
    }
}
