//! Tool trait implementations and registry builder.

use std::sync::Arc;

use news_tools_core::{BoxFuture, Tool, ToolError, ToolRegistry};

use crate::NewsTools;
use crate::types::{NewsSearchOutput, SearchNewsDetailInput, SearchNewsInput};

// ============================================================================
// SearchNewsTool
// ============================================================================

/// MCP tool for searching Naver news.
#[derive(Clone)]
pub struct SearchNewsTool {
    tools: Arc<NewsTools>,
}

impl SearchNewsTool {
    /// Create a new `SearchNewsTool` with shared state.
    #[must_use]
    pub const fn new(tools: Arc<NewsTools>) -> Self {
        Self { tools }
    }
}

impl Tool for SearchNewsTool {
    type Input = SearchNewsInput;
    type Output = NewsSearchOutput;

    const NAME: &'static str = "search_news";
    const DESCRIPTION: &'static str = "네이버 뉴스 검색 API로 기사를 검색합니다. Returns title, link, original link, summary and publish date for each article (no body text). sort: \"sim\" (relevance, default) or \"date\".";

    fn call(&self, input: Self::Input) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        Box::pin(async move { crate::search::search_news(&tools, input).await })
    }
}

// ============================================================================
// SearchNewsDetailTool
// ============================================================================

/// MCP tool for searching Naver news and extracting each article's body.
#[derive(Clone)]
pub struct SearchNewsDetailTool {
    tools: Arc<NewsTools>,
}

impl SearchNewsDetailTool {
    /// Create a new `SearchNewsDetailTool` with shared state.
    #[must_use]
    pub const fn new(tools: Arc<NewsTools>) -> Self {
        Self { tools }
    }
}

impl Tool for SearchNewsDetailTool {
    type Input = SearchNewsDetailInput;
    type Output = NewsSearchOutput;

    const NAME: &'static str = "search_news_detail";
    const DESCRIPTION: &'static str = "네이버 뉴스를 검색하고 각 기사의 본문을 추출합니다. Same fields as search_news plus the article body; an article that cannot be fetched or parsed gets a failure note instead. Set include_content=false to skip extraction.";

    fn call(&self, input: Self::Input) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        Box::pin(async move { crate::search::search_news_detail(&tools, input).await })
    }
}

// ============================================================================
// Registry builder
// ============================================================================

/// Build a `ToolRegistry` containing both news tools.
pub fn build_registry(tools: Arc<NewsTools>) -> ToolRegistry {
    ToolRegistry::builder()
        .register(SearchNewsTool::new(Arc::clone(&tools)))
        .register(SearchNewsDetailTool::new(tools))
        .finish()
}
