//! RegistryServer behavior without a transport.

use news_tools_core::{BoxFuture, TextFormat, Tool, ToolError, ToolRegistry};
use news_tools_mcp::{OutputMode, RegistryServer};
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
struct HeadlineTool;

#[derive(Debug, Deserialize, JsonSchema)]
struct HeadlineInput {
    /// Keyword to put in the headline
    keyword: String,
    #[serde(default)]
    fail: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
struct HeadlineOutput {
    #[serde(rename = "제목")]
    headline: String,
}

impl TextFormat for HeadlineOutput {
    fn fmt_text(&self) -> String {
        news_tools_core::pretty_json(self)
    }
}

impl Tool for HeadlineTool {
    type Input = HeadlineInput;
    type Output = HeadlineOutput;
    const NAME: &'static str = "headline";
    const DESCRIPTION: &'static str = "Make a headline";

    fn call(&self, input: HeadlineInput) -> BoxFuture<'static, Result<HeadlineOutput, ToolError>> {
        Box::pin(async move {
            if input.fail {
                return Err(ToolError::external("upstream unavailable"));
            }
            Ok(HeadlineOutput {
                headline: format!("{} 속보", input.keyword),
            })
        })
    }
}

fn server(mode: OutputMode) -> RegistryServer {
    let registry = Arc::new(ToolRegistry::builder().register(HeadlineTool).finish());
    RegistryServer::new(registry).with_output_mode(mode)
}

fn args(v: serde_json::Value) -> Option<serde_json::Map<String, serde_json::Value>> {
    v.as_object().cloned()
}

fn first_text(result: &CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .unwrap_or_default()
}

#[tokio::test]
async fn call_returns_pretty_json_text() {
    let server = server(OutputMode::Text);
    let result = server
        .call("headline", args(serde_json::json!({"keyword": "반도체"})))
        .await;

    assert_eq!(result.is_error, Some(false));
    assert!(result.structured_content.is_none());
    let text = first_text(&result);
    assert!(text.contains("\"제목\": \"반도체 속보\""), "got: {text}");
}

#[tokio::test]
async fn structured_mode_includes_structured_content() {
    let server = server(OutputMode::Structured);
    let result = server
        .call("headline", args(serde_json::json!({"keyword": "금리"})))
        .await;

    assert_eq!(
        result.structured_content,
        Some(serde_json::json!({"제목": "금리 속보"}))
    );
    assert!(server.tool_descriptors()[0].output_schema.is_some());
}

#[tokio::test]
async fn tool_error_becomes_error_result() {
    let server = server(OutputMode::Text);
    let result = server
        .call(
            "headline",
            args(serde_json::json!({"keyword": "x", "fail": true})),
        )
        .await;

    assert_eq!(result.is_error, Some(true));
    assert!(first_text(&result).contains("upstream unavailable"));
}

#[tokio::test]
async fn disallowed_tool_is_rejected() {
    let server = server(OutputMode::Text).with_allowlist(["other".to_string()]);
    assert!(server.effective_tool_names().is_empty());
    assert!(server.tool_descriptors().is_empty());

    let result = server
        .call("headline", args(serde_json::json!({"keyword": "x"})))
        .await;
    assert_eq!(result.is_error, Some(true));
    assert!(first_text(&result).contains("not enabled"));
}

#[test]
fn descriptors_carry_input_schema() {
    let server = server(OutputMode::Text);
    let tools = server.tool_descriptors();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "headline");
    assert!(tools[0].input_schema.get("properties").is_some());
    assert!(tools[0].output_schema.is_none());
}
