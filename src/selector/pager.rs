//! Pager widget selectors

/// Pager containers, most specific first. The first selector that matches
/// anything wins.
pub const PAGER_SELECTORS: &[&str] = &[
    ".pagination",
    ".paging",
    ".pager",
    ".paginate",
    ".pagenation",
    ".page_wrap",
    ".pg_wrap",
    ".board_paging",
    ".board-paging",
    ".page-nav",
    "#paging",
    "#pagination",
    ".page",
];

/// Highlighted page marker inside a pager.
pub const ACTIVE_PAGE_SELECTOR: &str =
    "strong, .on, .active, .current, .selected, .now, [aria-current]";

/// Screen-reader-only labels inside pager links ("현재", "페이지").
pub const HIDDEN_LABEL_SELECTOR: &str =
    ".blind, .sr-only, .sound_only, .screen_out, .hidden, .hide, .skip";

/// "Next" buttons identified by class or title, inside a pager.
pub const NEXT_SELECTORS: &[&str] = &[
    "a.next",
    "a.btn_next",
    "a.btn-next",
    "a.pg_next",
    "a.nextpage",
    "a.direction.next",
    "li.next a",
    ".next > a",
    "a[class*='next']",
    "a[title*='다음']",
    "a[title*='Next']",
    "a[title*='next']",
];

/// Visible texts and icon alts that mean "next page".
pub const NEXT_TEXT_MARKERS: &[&str] = &["다음", "Next", ">"];

/// Query keys that carry the current page number.
pub const PAGE_QUERY_KEYS: &[&str] = &["pageIndex", "page", "pageNo", "cpage"];
