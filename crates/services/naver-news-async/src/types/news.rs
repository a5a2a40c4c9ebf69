//! Types for the `news.json` search endpoint

use serde::{Deserialize, Serialize};

use crate::error::NaverError;

/// Largest page size the API accepts
pub const MAX_DISPLAY: u32 = 100;
/// Largest start offset the API accepts
pub const MAX_START: u32 = 1000;
/// Default page size
pub const DEFAULT_DISPLAY: u32 = 10;

/// Result ordering
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum SortOrder {
    /// Relevance (accuracy) order
    #[default]
    #[serde(rename = "sim")]
    Sim,
    /// Newest first
    #[serde(rename = "date")]
    Date,
}

impl SortOrder {
    /// Wire value of the sort option
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sim => "sim",
            Self::Date => "date",
        }
    }
}

/// Query parameters for a news search
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewsSearchRequest {
    /// Search keywords
    pub query: String,
    /// Number of results per page (1..=100)
    pub display: u32,
    /// 1-based start offset (1..=1000)
    pub start: u32,
    /// Ordering of results
    pub sort: SortOrder,
}

impl NewsSearchRequest {
    /// Creates a request with default paging (10 results from offset 1, relevance order)
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            display: DEFAULT_DISPLAY,
            start: 1,
            sort: SortOrder::Sim,
        }
    }

    /// Sets the page size
    #[must_use]
    pub const fn with_display(mut self, display: u32) -> Self {
        self.display = display;
        self
    }

    /// Sets the start offset
    #[must_use]
    pub const fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Sets the ordering
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Checks the request against the API's documented limits.
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::InvalidRequest`] for a blank query or out-of-range paging.
    pub fn validate(&self) -> Result<(), NaverError> {
        if self.query.trim().is_empty() {
            return Err(NaverError::InvalidRequest("query must not be empty".into()));
        }
        if !(1..=MAX_DISPLAY).contains(&self.display) {
            return Err(NaverError::InvalidRequest(format!(
                "display must be between 1 and {MAX_DISPLAY}, got {}",
                self.display
            )));
        }
        if !(1..=MAX_START).contains(&self.start) {
            return Err(NaverError::InvalidRequest(format!(
                "start must be between 1 and {MAX_START}, got {}",
                self.start
            )));
        }
        Ok(())
    }
}

/// Response body of the news search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSearchResponse {
    /// Time the result set was generated (RFC 2822)
    #[serde(default)]
    pub last_build_date: Option<String>,
    /// Total number of matching articles
    #[serde(default)]
    pub total: u64,
    /// Start offset echoed back
    #[serde(default)]
    pub start: u32,
    /// Page size echoed back
    #[serde(default)]
    pub display: u32,
    /// Result items in upstream order
    #[serde(default)]
    pub items: Vec<NewsItem>,
}

/// A single news search hit
///
/// `title` and `description` carry `<b>` highlight markup and HTML entities as sent by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    /// Headline
    #[serde(default)]
    pub title: String,
    /// Publisher's own article URL
    #[serde(default)]
    pub originallink: String,
    /// Naver news URL (falls back to the publisher URL when not hosted by Naver)
    #[serde(default)]
    pub link: String,
    /// Summary snippet
    #[serde(default)]
    pub description: String,
    /// Publish date (RFC 2822)
    #[serde(default, rename = "pubDate")]
    pub pub_date: String,
}
