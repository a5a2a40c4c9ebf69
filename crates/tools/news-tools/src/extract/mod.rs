//! Article body extraction.
//!
//! A page is fetched once and searched in three stages, each tried only when the
//! previous one produced no text:
//!
//! 1. the publisher rule matching the URL host ([`rules::SITE_RULES`])
//! 2. generic article containers ([`rules::GENERIC_LOCATORS`])
//! 3. a cascade of common body ids and classes ([`rules::SECONDARY_LOCATORS`])
//!
//! Text shorter than [`MIN_CONTENT_CHARS`] is treated as not found. Extraction never
//! returns an error to the caller: failures are reported inside [`ExtractionResult`].

pub mod document;
pub mod fetch;
pub mod rules;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub use document::ArticleDocument;
pub use fetch::{FETCH_TIMEOUT, browser_headers};
pub use rules::{Locator, SiteRule};

/// Bodies with fewer characters than this are navigation or teaser fragments.
pub const MIN_CONTENT_CHARS: usize = 100;

/// Why extraction produced no body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// Network failure, timeout or non-2xx status.
    #[error("article access failed: {0}")]
    Fetch(String),
    /// The page was received but processing it failed.
    #[error("article parsing failed: {0}")]
    Parse(String),
    /// No locator produced enough text.
    #[error("article body not found")]
    NotFound,
}

/// Outcome of extracting one article. Exactly one of `content` and `error` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    title: String,
    content: String,
    error: String,
}

impl ExtractionResult {
    fn success(title: String, content: String) -> Self {
        Self {
            title,
            content,
            error: String::new(),
        }
    }

    fn failure(title: String, error: &ExtractError) -> Self {
        Self {
            title,
            content: String::new(),
            error: error.to_string(),
        }
    }

    /// Page title; empty when the page could not be fetched or parsed.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Extracted body text; empty on failure.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Failure description; empty on success.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// True when a body was extracted.
    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }
}

/// Fetches article pages and extracts their bodies.
#[derive(Debug, Clone)]
pub struct ArticleExtractor {
    http: reqwest::Client,
}

impl ArticleExtractor {
    /// Extractor with a 10 second timeout and browser-like headers.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn new() -> Self {
        Self::with_http_client(fetch::article_http_client())
    }

    /// Uses the given client. Browser headers are added to every request.
    #[must_use]
    pub const fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch `url` and extract its title and body.
    pub async fn extract(&self, url: &str) -> ExtractionResult {
        let html = match fetch::fetch_page(&self.http, url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(url, error = %e, "article fetch failed");
                return ExtractionResult::failure(String::new(), &e);
            }
        };

        let host = host_of(url);
        let result = parse_on_blocking_pool(move || extract_from_html(&host, &html)).await;
        if !result.is_success() {
            debug!(url, error = result.error(), "no article body");
        }
        result
    }
}

/// Run `parse` on the blocking pool; scraper documents are !Send. A panic inside
/// `parse` becomes a [`ExtractError::Parse`] failure with an empty title.
async fn parse_on_blocking_pool<F>(parse: F) -> ExtractionResult
where
    F: FnOnce() -> ExtractionResult + Send + 'static,
{
    match tokio::task::spawn_blocking(parse).await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "article parsing task failed");
            ExtractionResult::failure(String::new(), &ExtractError::Parse(e.to_string()))
        }
    }
}

impl Default for ArticleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased host of `url`, or empty when it has none.
fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .unwrap_or_default()
}

/// Extract title and body from an already downloaded page served from `host`.
pub fn extract_from_html(host: &str, html: &str) -> ExtractionResult {
    let doc = ArticleDocument::parse(html);
    let title = doc.title();

    let mut fragments = Vec::new();

    if let Some(rule) = rules::rule_for_host(host) {
        fragments = first_located(&doc, rule.locators, rule.strip).unwrap_or_default();
        debug!(site = rule.name, fragments = fragments.len(), "publisher rule");
    }

    if fragments.is_empty() {
        fragments = first_located(&doc, rules::GENERIC_LOCATORS, rules::BOILERPLATE_TAGS)
            .unwrap_or_default();
    }

    if fragments.is_empty() {
        fragments = first_non_empty(&doc, rules::SECONDARY_LOCATORS, rules::BOILERPLATE_TAGS)
            .unwrap_or_default();
    }

    // The floor counts text only, not the spaces used to join fragments.
    let chars: usize = fragments.iter().map(|f| f.chars().count()).sum();
    if chars < MIN_CONTENT_CHARS {
        return ExtractionResult::failure(title, &ExtractError::NotFound);
    }
    ExtractionResult::success(title, fragments.join(" "))
}

/// Fragments of the first candidate that locates an element, even if it has no text.
fn first_located<'d>(
    doc: &'d ArticleDocument,
    locators: &[Locator],
    strip: &[&str],
) -> Option<Vec<&'d str>> {
    locators
        .iter()
        .find_map(|l| doc.locate(l))
        .map(|el| ArticleDocument::fragments(el, strip))
}

/// Fragments of the first candidate that has any text.
fn first_non_empty<'d>(
    doc: &'d ArticleDocument,
    locators: &[Locator],
    strip: &[&str],
) -> Option<Vec<&'d str>> {
    locators.iter().find_map(|l| {
        doc.locate(l)
            .map(|el| ArticleDocument::fragments(el, strip))
            .filter(|f| !f.is_empty())
    })
}
