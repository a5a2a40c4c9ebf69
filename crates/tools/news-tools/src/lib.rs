#![deny(warnings)]
#![deny(clippy::all)]

//! Naver news search and article body extraction tools.

pub mod extract;
pub mod search;
pub mod tools;
pub mod types;

use naver_news_async::NaverConfig;

use crate::extract::ArticleExtractor;

/// Shared state for the news tools.
///
/// Holds the search API client and the article extractor for reuse across MCP calls.
pub struct NewsTools {
    /// Naver search API client
    pub(crate) naver: naver_news_async::Client<NaverConfig>,
    /// Article page fetcher and body extractor
    pub(crate) extractor: ArticleExtractor,
}

impl NewsTools {
    /// Create a `NewsTools` instance configured from the environment.
    ///
    /// # Panics
    /// Panics if a reqwest HTTP client cannot be built.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(NaverConfig::new())
    }

    /// Create a `NewsTools` instance with an explicit search API configuration.
    ///
    /// # Panics
    /// Panics if a reqwest HTTP client cannot be built.
    #[must_use]
    pub fn with_config(config: NaverConfig) -> Self {
        Self::with_clients(
            naver_news_async::Client::with_config(config),
            ArticleExtractor::new(),
        )
    }

    /// Create a `NewsTools` instance from prebuilt clients.
    #[must_use]
    pub const fn with_clients(
        naver: naver_news_async::Client<NaverConfig>,
        extractor: ArticleExtractor,
    ) -> Self {
        Self { naver, extractor }
    }
}

impl Default for NewsTools {
    fn default() -> Self {
        Self::new()
    }
}

pub use tools::build_registry;
