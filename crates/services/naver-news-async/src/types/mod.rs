//! Request and response types for the Naver search API

/// News search endpoint types
pub mod news;

pub use news::{NewsItem, NewsSearchRequest, NewsSearchResponse, SortOrder};
