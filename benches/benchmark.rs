//! Performance benchmarks for board-extract.
//!
//! Run with: `cargo bench`
//!
//! Listing and detail extraction over synthetic board pages of growing size.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use board_extract::listing::DateFilter;
use board_extract::{extract_detail, extract_listing, Options, PostSummary};
use url::Url;

fn listing_html(rows: usize) -> String {
    let body: String = (0..rows)
        .map(|i| {
            format!(
                r#"<tr><td>{n}</td><td class="subject"><a href="view.do?bbsId=7&amp;nttId={n}">{n}번째 공지사항 제목입니다</a> <span class="new">N</span></td><td>관리자</td><td>2024-05-{day:02}</td><td>{views}</td></tr>"#,
                n = rows - i,
                day = i % 28 + 1,
                views = i * 13
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html><html><body>
        <div id="header"><ul class="gnb"><li><a href="/intro">기관소개</a></li><li><a href="/board">알림마당</a></li></ul></div>
        <table class="board_list"><thead><tr><th>번호</th><th>제목</th><th>작성자</th><th>등록일</th><th>조회</th></tr></thead>
        <tbody>{body}</tbody></table>
        <div class="paging"><strong>1</strong><a href="?pageIndex=2">2</a><a href="?pageIndex=3">3</a><a class="next" href="?pageIndex=2">다음</a></div>
        </body></html>"#
    )
}

fn detail_html(paragraphs: usize) -> String {
    let body: String = (0..paragraphs)
        .map(|i| format!("<p>{i}번째 문단입니다. 행사 일정과 장소, 신청 방법을 안내합니다.</p>"))
        .collect();

    format!(
        r#"<!DOCTYPE html><html><body>
        <div class="lnb"><a href="/a">본문 바로가기</a><a href="/b">전체메뉴</a></div>
        <div class="board_view">
          <div class="view_cont">{body}<img src="/upload/photo.jpg"><script>var x = 1;</script></div>
          <div class="file"><a href="/cmm/fileDown.do?fileNo=1" title="안내문.hwp">다운로드</a></div>
        </div>
        <div class="satisfaction">이 페이지에 대한 만족도 조사</div>
        </body></html>"#
    )
}

fn bench_listing(c: &mut Criterion) {
    let url = Url::parse("https://www.example.go.kr/board/list.do?bbsId=7").unwrap();
    let filter = DateFilter::since(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let options = Options::default();

    let mut group = c.benchmark_group("extract_listing");
    for rows in [10, 50, 200] {
        let html = listing_html(rows);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &html, |b, html| {
            b.iter(|| extract_listing(black_box(html), &url, &filter, &options));
        });
    }
    group.finish();
}

fn bench_detail(c: &mut Criterion) {
    let url = Url::parse("https://www.example.go.kr/board/view.do?bbsId=7&nttId=1").unwrap();
    let summary = PostSummary {
        title: "행사 안내".to_string(),
        link: url.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    };
    let options = Options::default();

    let mut group = c.benchmark_group("extract_detail");
    for paragraphs in [5, 50, 300] {
        let html = detail_html(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &html, |b, html| {
            b.iter(|| extract_detail(black_box(html), &url, summary.clone(), &options));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_listing, bench_detail);
criterion_main!(benches);
