//! Listing page rules
//!
//! Row recognition, title-like selectors and labels that are never titles.

use dom_query::Selection;

use crate::dom;
use crate::selector::utils::any_class;
use crate::selector::Rule;

/// Row rules; the nearest element matching any of them encloses one post.
pub static ROW_RULES: &[Rule] = &[
    is_table_row,
    is_list_item,
    is_list_item_div,
    is_container_div,
    is_definition_list,
];

/// `<tr>`
#[must_use]
pub fn is_table_row(sel: &Selection) -> bool {
    dom::is_one_of_tags(sel, &["tr"])
}

/// `<li>`
#[must_use]
pub fn is_list_item(sel: &Selection) -> bool {
    dom::is_one_of_tags(sel, &["li"])
}

/// `<div class="list-item">`, `<div class="board_list_item">` and similar
#[must_use]
pub fn is_list_item_div(sel: &Selection) -> bool {
    dom::is_one_of_tags(sel, &["div"])
        && any_class(sel, |t| t.contains("list-item") || t.contains("list_item"))
}

/// `<div class="container">`, `<div class="txt-container">` and similar
#[must_use]
pub fn is_container_div(sel: &Selection) -> bool {
    dom::is_one_of_tags(sel, &["div"]) && has_container_class(sel)
}

/// `<dl>`
#[must_use]
pub fn is_definition_list(sel: &Selection) -> bool {
    dom::is_one_of_tags(sel, &["dl"])
}

/// Container-class token: `container`, `*-container`, `*_container`
#[must_use]
pub fn has_container_class(sel: &Selection) -> bool {
    any_class(sel, |t| {
        t == "container" || t.ends_with("-container") || t.ends_with("_container")
    })
}

/// Rows whose own anchors are not enough: narrow text blocks whose thumbnail
/// link sits beside them in the parent.
#[must_use]
pub fn needs_parent_anchors(row: &Selection) -> bool {
    dom::is_one_of_tags(row, &["dl", "dd", "dt"]) || has_container_class(row)
}

/// Elements searched, in order, for a title when no anchor supplies one.
pub const TITLE_LIKE_SELECTORS: &[&str] = &[
    "dt", ".subject", ".title", "strong", "h4", "h5", "dd", ".tit", ".txt", ".bo_tit", "b",
    "span",
];

/// Exact texts (case-insensitive) that are metadata, badges or author names.
pub const GARBAGE_LABELS: &[&str] = &[
    // Column headers and field labels
    "번호", "제목", "작성자", "글쓴이", "작성일", "등록일", "조회", "조회수", "추천", "첨부",
    "첨부파일", "파일", "상태", "분류", "구분", "답변", "답변완료", "접수", "처리중",
    // Badges
    "new", "hot", "n", "공지", "공지사항", "새글", "notice", "icon", "file", "attach",
    // Common author names
    "관리자", "운영자", "administrator", "admin", "webmaster", "담당자", "홍보팀", "홍보담당",
    // Share buttons
    "공유", "공유하기", "인쇄", "print", "share", "더보기", "more", "바로가기",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::matches_any;

    #[test]
    fn test_row_rules() {
        let doc = dom::parse(
            r#"
            <table><tr id="tr"><td>x</td></tr></table>
            <ul><li id="li">x</li></ul>
            <div id="item" class="board list-item">x</div>
            <div id="cont" class="txt-container">x</div>
            <dl id="dl"><dt>x</dt></dl>
            <div id="plain" class="wrapper">x</div>
        "#,
        );

        for id in ["#tr", "#li", "#item", "#cont", "#dl"] {
            assert!(matches_any(&doc.select(id), ROW_RULES), "{id} should be a row");
        }
        assert!(!matches_any(&doc.select("#plain"), ROW_RULES));
    }

    #[test]
    fn test_container_class_tokens() {
        let doc = dom::parse(
            r#"<div id="a" class="container"></div><div id="b" class="containers"></div>"#,
        );
        assert!(has_container_class(&doc.select("#a")));
        assert!(!has_container_class(&doc.select("#b")));
    }

    #[test]
    fn test_needs_parent_anchors() {
        let doc = dom::parse(
            r#"<dl id="dl"><dt>t</dt></dl><div id="c" class="info_container"></div><table><tr id="tr"><td></td></tr></table>"#,
        );
        assert!(needs_parent_anchors(&doc.select("#dl")));
        assert!(needs_parent_anchors(&doc.select("#c")));
        assert!(!needs_parent_anchors(&doc.select("#tr")));
    }
}
