//! Input/output types for the news tools.

use naver_news_async::types::news::{DEFAULT_DISPLAY, SortOrder};
use news_tools_core::{TextFormat, pretty_json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const fn default_display() -> u32 {
    DEFAULT_DISPLAY
}

const fn default_start() -> u32 {
    1
}

const fn default_true() -> bool {
    true
}

// ============================================================================
// search_news types
// ============================================================================

/// Input for the `search_news` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchNewsInput {
    /// Search keywords
    pub query: String,
    /// Number of results (default: 10, max: 100)
    #[serde(default = "default_display")]
    pub display: u32,
    /// 1-based start offset (default: 1, max: 1000)
    #[serde(default = "default_start")]
    pub start: u32,
    /// "sim" for relevance (default) or "date" for newest first
    #[serde(default)]
    pub sort: SortOrder,
}

// ============================================================================
// search_news_detail types
// ============================================================================

/// Input for the `search_news_detail` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchNewsDetailInput {
    /// Search keywords
    pub query: String,
    /// Number of results (default: 10, max: 100)
    #[serde(default = "default_display")]
    pub display: u32,
    /// 1-based start offset (default: 1, max: 1000)
    #[serde(default = "default_start")]
    pub start: u32,
    /// "sim" for relevance (default) or "date" for newest first
    #[serde(default)]
    pub sort: SortOrder,
    /// Fetch each article and include its body text (default: true)
    #[serde(default = "default_true")]
    pub include_content: bool,
}

// ============================================================================
// Shared output
// ============================================================================

/// One news article as returned to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct NewsRecord {
    /// Headline without highlight markup
    #[serde(rename = "제목")]
    pub title: String,
    /// Naver news URL
    #[serde(rename = "링크")]
    pub link: String,
    /// Publisher URL
    #[serde(rename = "원본링크")]
    pub original_link: String,
    /// Summary snippet without highlight markup
    #[serde(rename = "요약")]
    pub summary: String,
    /// Publish date as sent by the API
    #[serde(rename = "발행일")]
    pub published: String,
    /// Article body, or a note explaining why it could not be extracted
    #[serde(rename = "본문", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Output of both news tools.
///
/// The text rendering is the bare record list; the structured form also carries paging.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct NewsSearchOutput {
    /// Total number of matching articles upstream
    #[serde(rename = "전체")]
    pub total: u64,
    /// Start offset of this page
    #[serde(rename = "시작")]
    pub start: u32,
    /// Requested page size
    #[serde(rename = "표시")]
    pub display: u32,
    /// Articles in search order
    #[serde(rename = "기사")]
    pub items: Vec<NewsRecord>,
}

impl TextFormat for NewsSearchOutput {
    fn fmt_text(&self) -> String {
        pretty_json(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_fill_defaults() {
        let input: SearchNewsInput =
            serde_json::from_value(serde_json::json!({"query": "삼성전자"})).unwrap();
        assert_eq!(input.display, 10);
        assert_eq!(input.start, 1);
        assert_eq!(input.sort, SortOrder::Sim);

        let input: SearchNewsDetailInput =
            serde_json::from_value(serde_json::json!({"query": "q", "sort": "date"})).unwrap();
        assert!(input.include_content);
        assert_eq!(input.sort, SortOrder::Date);
    }

    #[test]
    fn unknown_sort_is_rejected() {
        let res: Result<SearchNewsInput, _> =
            serde_json::from_value(serde_json::json!({"query": "q", "sort": "newest"}));
        assert!(res.is_err());
    }

    #[test]
    fn text_is_pretty_korean_record_list() {
        let out = NewsSearchOutput {
            total: 1,
            start: 1,
            display: 10,
            items: vec![NewsRecord {
                title: "반도체 수출 회복".into(),
                link: "https://n.news.naver.com/1".into(),
                original_link: "https://example.com/1".into(),
                summary: "요약".into(),
                published: "Mon, 19 Oct 2026 09:00:00 +0900".into(),
                content: None,
            }],
        };
        let text = out.fmt_text();
        assert!(text.starts_with('['));
        assert!(text.contains("\"제목\": \"반도체 수출 회복\""));
        assert!(text.contains("\"원본링크\""));
        assert!(!text.contains("본문"));

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["발행일"], "Mon, 19 Oct 2026 09:00:00 +0900");
    }
}
