//! Detail page content rules
//!
//! Known content containers of common board and CMS platforms, and the
//! noise removed from whichever container is chosen.

/// Content containers in priority order. First match wins.
pub const CONTENT_SELECTORS: &[&str] = &[
    // Government / public-sector board platforms
    ".view_cont",
    ".view_content",
    ".view-content",
    ".view_con",
    ".viewCon",
    ".board_view .content",
    ".bbs_view .content",
    ".board-view-content",
    ".bbs_content",
    ".board_content",
    ".cont_view",
    ".tbl_view .content",
    ".view_txt",
    ".view-txt",
    ".bbs_detail",
    // Gnuboard
    "#bo_v_con",
    ".bo_v_con",
    "#bo_v_atc",
    // XpressEngine / Rhymix
    ".xe_content",
    ".rd_body",
    // Editors
    ".fr-view",
    ".se-main-container",
    ".note-editable",
    // Blog and news CMS
    "#articleBody",
    "[itemprop='articleBody']",
    ".article_view",
    ".article-body",
    ".post-content",
    ".entry-content",
    "article",
];

/// Generic block containers scanned when no known selector matches.
pub const SCAN_SELECTOR: &str = "div, article, section, main, td";

/// Scanned containers longer than this are rejected when they carry a
/// navigation marker.
pub const NAV_DOMINATED_MIN_CHARS: usize = 500;

/// Phrases that only appear in site navigation and menus.
pub const NAV_MARKERS: &[&str] = &[
    "본문 바로가기",
    "주메뉴 바로가기",
    "전체메뉴",
    "사이트맵",
    "주요메뉴",
    "메뉴열기",
    "메뉴 닫기",
    "로그인",
    "회원가입",
    "Skip to content",
    "Skip to main",
    "Main menu",
];

/// Scripts, styles, forms and interactive controls.
pub const CONTROL_SELECTOR: &str =
    "script, style, noscript, template, form, button, input, select, textarea, iframe, object, embed";

/// Semantic page chrome.
pub const CHROME_SELECTOR: &str = "header, footer, nav, aside, dialog, menu";

/// Classed navigation, utility, search, share, attachment-list and
/// accessibility elements.
pub const NOISE_SELECTOR: &str = concat!(
    ".nav, .navigation, .gnb, .lnb, .snb, .breadcrumb, .location, .path, ",
    ".util, .utility, .util_area, .sns, .sns_area, .share, .share_area, .print, .btn_print, ",
    ".search, .search_area, .srch, .board_search, ",
    ".file, .files, .file_list, .file-list, .attach, .attach_file, .bo_v_file, .view_file, .add_file, ",
    ".skip, .skip_nav, .blind, .sr-only, .screen_out, .hidden, .hide, ",
    ".btn_area, .btn-area, .btn_wrap, .prev_next, .page_move, .view_nav, .satisfaction",
);

/// Blocks tested for a leading attachment label.
pub const LABELED_BLOCK_SELECTOR: &str = "tr, li, dl, dt, dd, p, div, th";

/// Labelled blocks longer than this are content that merely starts with the
/// word, not an attachment list.
pub const ATTACHMENT_BLOCK_MAX_CHARS: usize = 300;

/// Labels that introduce an attachment list.
pub const ATTACHMENT_LABELS: &[&str] = &["첨부파일", "첨부", "파일첨부", "Attachment", "attachment", "Attachments"];

/// Elements after which the linearized text breaks a line.
pub const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "ol", "p", "pre", "section", "table", "tr", "ul",
];

/// Elements whose text never reaches the output.
pub const SILENT_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_selector_lists_parse() {
        let doc = dom::parse("<div class='view_cont'>x</div>");
        let root = doc.select("body");
        for selector in CONTENT_SELECTORS {
            let _ = root.select(selector);
        }
        for selector in [SCAN_SELECTOR, CONTROL_SELECTOR, CHROME_SELECTOR, NOISE_SELECTOR, LABELED_BLOCK_SELECTOR] {
            let _ = root.select(selector);
        }
        assert!(root.select(CONTENT_SELECTORS[0]).exists());
    }

    #[test]
    fn test_noise_selector_matches_classed_utilities() {
        let doc = dom::parse(
            r#"<div class="share_area">s</div><div class="file_list">f</div><span class="blind">b</span><p>keep</p>"#,
        );
        assert_eq!(doc.select(NOISE_SELECTOR).length(), 3);
    }
}
