//! Page download with browser-like request headers.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;

use super::ExtractError;

/// Per-request timeout for article pages.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7";

/// Headers added to every article request, whatever client sends it. Publishers serve
/// bots a different page.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

/// HTTP client for article pages.
///
/// Idle connections are not pooled: each article usually lives on a different host
/// and is fetched once.
///
/// # Panics
///
/// Panics if the reqwest client cannot be built.
#[must_use]
pub fn article_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .pool_max_idle_per_host(0)
        .build()
        .expect("reqwest client")
}

/// GET `url` and return the decoded body. Any transport failure or non-2xx status is a
/// [`ExtractError::Fetch`].
pub async fn fetch_page(http: &reqwest::Client, url: &str) -> Result<String, ExtractError> {
    let response = http
        .get(url)
        .headers(browser_headers())
        .send()
        .await
        .map_err(|e| ExtractError::Fetch(e.to_string()))?;

    let status = response.status();
    debug!(url, status = status.as_u16(), "article response");

    let response = response
        .error_for_status()
        .map_err(|e| ExtractError::Fetch(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| ExtractError::Fetch(e.to_string()))
}
