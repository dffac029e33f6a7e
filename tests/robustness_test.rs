//! Malformed and hostile input never panics; it degrades to empty results.

use board_extract::listing::DateFilter;
use board_extract::{extract_detail, extract_listing, Options, PostSummary};
use chrono::NaiveDate;
use proptest::prelude::*;
use url::Url;

fn base() -> Url {
    Url::parse("https://example.com/board/list.do?bbsId=1").unwrap()
}

fn filter() -> DateFilter {
    DateFilter::since(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
}

fn summary() -> PostSummary {
    PostSummary {
        title: "제목".to_string(),
        link: "https://example.com/board/view.do?id=1".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

const MALFORMED: &[&str] = &[
    "",
    "<",
    "<p>text<div>more",
    "<p><div></p></div>",
    "<html><body><table><tr><td>2024-05-01",
    "<div class=\"test id=broken>",
    "&amp text &lt;",
    "<a href=\"\">2024-05-01</a>",
    "<a href=\"javascript:void(0)\">x</a><span>2024-05-01</span>",
    "<li><a href=\"http://[::1\">깨진 링크</a>2024-05-01</li>",
    "<div class=\"paging\"><strong>4294967295</strong><a href=\"?p=1\">1</a></div>",
    "<div class=\"file\"><a href=\"%%%\">다운로드</a></div>",
    "<img src=\"data:image/png;base64,AAAA\">",
];

#[test]
fn malformed_listings_do_not_panic() {
    for html in MALFORMED {
        let listing = extract_listing(html, &base(), &filter(), &Options::default());
        for post in &listing.posts {
            assert!(Url::parse(&post.link).is_ok(), "{html:?} produced {post:?}");
        }
    }
}

#[test]
fn malformed_details_do_not_panic() {
    for html in MALFORMED {
        let _ = extract_detail(html, &base(), summary(), &Options::default());
    }
}

#[test]
fn dated_row_without_any_link_is_skipped() {
    let html = "<table><tr><td>링크 없는 행</td><td>2024-05-01</td></tr></table>";
    let listing = extract_listing(html, &base(), &filter(), &Options::default());
    assert!(listing.posts.is_empty());
}

#[test]
fn overflowing_page_number_has_no_next_url() {
    let html = "<div class=\"paging\"><strong>4294967295</strong><a href=\"?p=1\">1</a></div>";
    let listing = extract_listing(html, &base(), &filter(), &Options::default());
    assert_eq!(listing.pagination.next_url, None);
}

#[test]
fn deeply_nested_markup_is_handled() {
    let depth = 200;
    let html = format!(
        "{}<a href=\"/view?id=1\">깊은 곳의 게시물</a><span>2024-05-01</span>{}",
        "<div><ul><li>".repeat(depth),
        "</li></ul></div>".repeat(depth)
    );

    let listing = extract_listing(&html, &base(), &filter(), &Options::default());
    assert_eq!(listing.posts.len(), 1);
    let _ = extract_detail(&html, &base(), summary(), &Options::default());
}

const TAG_SOUP: &[&str] = &[
    "<tr>", "</tr>", "<td>", "</td>", "<li>", "</li>", "<a href=\"/v?id=1\">",
    "<a href=\"?page=2\">", "</a>", "2024-05-01", "12:30", "다음", "첨부파일",
    "<div class=\"paging\">", "<div class=\"view_cont\">", "</div>", "<img src=\"a.jpg\">",
    "<script>", "</script>", "제목 텍스트", "<br>",
];

proptest! {
    #[test]
    fn arbitrary_text_never_panics(html in "\\PC{0,300}") {
        let _ = extract_listing(&html, &base(), &filter(), &Options::default());
        let _ = extract_detail(&html, &base(), summary(), &Options::default());
    }

    #[test]
    fn tag_soup_never_panics(
        parts in prop::collection::vec(
            prop::sample::select(TAG_SOUP),
            0..40,
        )
    ) {
        let html = parts.concat();
        let _ = extract_listing(&html, &base(), &filter(), &Options::default());
        let _ = extract_detail(&html, &base(), summary(), &Options::default());
    }
}
