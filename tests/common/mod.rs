//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use board_extract::{Error, Fetcher, RawDocument, Result};
use url::Url;

/// In-memory fetcher: pages not registered answer 404.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<Url, RawDocument>,
    slow: HashMap<Url, Duration>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`, with `url` as the base.
    pub fn page(mut self, url: &str, html: &str) -> Self {
        let url = Url::parse(url).unwrap();
        self.pages.insert(url.clone(), RawDocument::new(html, url));
        self
    }

    /// Serve `html` for `url` as if the request had been redirected to `final_url`.
    pub fn redirected(mut self, url: &str, final_url: &str, html: &str) -> Self {
        let doc = RawDocument::new(html, Url::parse(final_url).unwrap());
        self.pages.insert(Url::parse(url).unwrap(), doc);
        self
    }

    /// Delay every answer for `url`.
    pub fn slow(mut self, url: &str, delay: Duration) -> Self {
        self.slow.insert(Url::parse(url).unwrap(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<RawDocument> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.slow.get(url) {
            tokio::time::sleep(*delay).await;
        }

        self.pages.get(url).cloned().ok_or_else(|| Error::HttpStatus {
            url: url.to_string(),
            status: 404,
        })
    }
}

pub const LISTING_URL: &str = "https://www.example.go.kr/board/list.do?bbsId=7";

/// A four-row notice board with a pager.
pub const LISTING_HTML: &str = r#"
<html><body>
  <div id="header"><a href="/main.do">홈으로</a></div>
  <table class="board_list">
    <thead><tr><th>번호</th><th>제목</th><th>작성자</th><th>등록일</th></tr></thead>
    <tbody>
      <tr><td>4</td><td class="subject"><a href="view.do?bbsId=7&amp;nttId=4">하계 휴관 안내</a></td><td>관리자</td><td>2024-05-20</td></tr>
      <tr><td>3</td><td class="subject"><a href="view.do?bbsId=7&amp;nttId=3">2024년 상반기 채용 공고</a></td><td>관리자</td><td>2024.05.10</td></tr>
      <tr><td>2</td><td class="subject"><a href="view.do?bbsId=7&amp;nttId=2">시설 점검에 따른 이용 제한</a></td><td>관리자</td><td>2024-05-02</td></tr>
      <tr><td>1</td><td class="subject"><a href="view.do?bbsId=7&amp;nttId=1">지난 공지</a></td><td>관리자</td><td>2024-03-15</td></tr>
    </tbody>
  </table>
  <div class="paging">
    <strong>1</strong>
    <a href="?pageIndex=2">2</a>
    <a href="?pageIndex=3">3</a>
  </div>
</body></html>
"#;

pub fn detail_url(id: u32) -> String {
    format!("https://www.example.go.kr/board/view.do?bbsId=7&nttId={id}")
}

pub fn detail_html(body: &str) -> String {
    format!(
        r#"<html><body>
          <div class="lnb"><a href="/a">메뉴</a></div>
          <div class="view_cont"><p>{body}</p></div>
        </body></html>"#
    )
}
