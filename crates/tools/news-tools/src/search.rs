//! News search and detail implementations.

use futures::stream::{self, StreamExt};
use naver_news_async::NaverError;
use naver_news_async::types::news::{NewsItem, NewsSearchRequest, SortOrder};
use news_tools_core::ToolError;
use tracing::{info, warn};

use crate::NewsTools;
use crate::extract::{ArticleExtractor, ExtractionResult};
use crate::types::{NewsRecord, NewsSearchOutput, SearchNewsDetailInput, SearchNewsInput};

/// Articles extracted concurrently by `search_news_detail`.
pub const MAX_CONCURRENT_EXTRACTIONS: usize = 4;

/// Search Naver news and return cleaned records without body text.
///
/// # Errors
/// Returns `ToolError::InvalidInput` for out-of-range arguments and
/// `ToolError::External` when the search API call fails.
pub async fn search_news(
    tools: &NewsTools,
    input: SearchNewsInput,
) -> Result<NewsSearchOutput, ToolError> {
    run_search(tools, &input.query, input.display, input.start, input.sort).await
}

/// Search Naver news, then fetch every article and attach its body.
///
/// Extraction failures never fail the call; they become a note in the record's body.
///
/// # Errors
/// Returns `ToolError` only when the search itself fails.
pub async fn search_news_detail(
    tools: &NewsTools,
    input: SearchNewsDetailInput,
) -> Result<NewsSearchOutput, ToolError> {
    let mut output =
        run_search(tools, &input.query, input.display, input.start, input.sort).await?;
    if !input.include_content || output.items.is_empty() {
        return Ok(output);
    }

    let links: Vec<String> = output.items.iter().map(|r| r.link.clone()).collect();
    let bodies = extract_all(&tools.extractor, links).await;
    for (record, body) in output.items.iter_mut().zip(bodies) {
        record.content = Some(body);
    }
    Ok(output)
}

async fn run_search(
    tools: &NewsTools,
    query: &str,
    display: u32,
    start: u32,
    sort: SortOrder,
) -> Result<NewsSearchOutput, ToolError> {
    let req = NewsSearchRequest::new(query)
        .with_display(display)
        .with_start(start)
        .with_sort(sort);

    let resp = tools.naver.news().search(req).await.map_err(map_naver_error)?;
    info!(query, total = resp.total, returned = resp.items.len(), "news search");

    Ok(NewsSearchOutput {
        total: resp.total,
        start,
        display,
        items: resp.items.into_iter().map(to_record).collect(),
    })
}

/// Extract every link with bounded concurrency. Output order matches input order.
async fn extract_all(extractor: &ArticleExtractor, links: Vec<String>) -> Vec<String> {
    stream::iter(links)
        .map(|link| {
            let extractor = extractor.clone();
            async move {
                let task = tokio::spawn(async move { extractor.extract(&link).await });
                match task.await {
                    Ok(result) => body_or_note(&result),
                    Err(e) => {
                        warn!(error = %e, "extraction task failed");
                        format!("본문 추출 오류: {e}")
                    }
                }
            }
        })
        .buffered(MAX_CONCURRENT_EXTRACTIONS)
        .collect()
        .await
}

fn body_or_note(result: &ExtractionResult) -> String {
    if result.is_success() {
        result.content().to_string()
    } else {
        format!("본문 추출 실패: {}", result.error())
    }
}

fn to_record(item: NewsItem) -> NewsRecord {
    NewsRecord {
        title: strip_markup(&item.title),
        link: item.link,
        original_link: item.originallink,
        summary: strip_markup(&item.description),
        published: item.pub_date,
        content: None,
    }
}

/// Remove tags such as `<b>` and decode HTML entities.
pub fn strip_markup(s: &str) -> String {
    if !s.contains(['<', '&']) {
        return s.trim().to_string();
    }
    let fragment = scraper::Html::parse_fragment(s);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

fn map_naver_error(e: NaverError) -> ToolError {
    match e {
        NaverError::InvalidRequest(msg) => ToolError::invalid_input(msg),
        other => ToolError::external(format!("Naver news search failed: {other}")),
    }
}
