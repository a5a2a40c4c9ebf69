//! MCP server handler backed by a ToolRegistry.

use news_tools_core::ToolRegistry;
use rmcp::model as m;
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Output mode for tool results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Text content only. Default.
    #[default]
    Text,
    /// Text content plus `structured_content`; `list_tools` publishes output schemas.
    Structured,
}

/// MCP server handler backed by a [`ToolRegistry`].
///
/// Cheap to clone: the registry and allowlist are shared, so the streamable HTTP
/// transport can hand one clone to every session.
#[derive(Clone)]
pub struct RegistryServer {
    registry: Arc<ToolRegistry>,
    allowlist: Option<Arc<HashSet<String>>>,
    output_mode: OutputMode,
    name: String,
    version: String,
}

impl RegistryServer {
    /// Create a new server from a registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            allowlist: None,
            output_mode: OutputMode::default(),
            name: "naver-news-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Only tools in this list will be visible and callable.
    pub fn with_allowlist(mut self, allowlist: impl IntoIterator<Item = String>) -> Self {
        self.allowlist = Some(Arc::new(allowlist.into_iter().collect()));
        self
    }

    /// Set the output mode for tool results.
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Set the server name and version reported at initialization.
    pub fn with_info(mut self, name: &str, version: &str) -> Self {
        self.name = name.to_string();
        self.version = version.to_string();
        self
    }

    /// Server name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Server version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Output mode.
    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Effective tool names (respecting the allowlist), sorted.
    pub fn effective_tool_names(&self) -> Vec<String> {
        self.registry
            .list_names()
            .into_iter()
            .filter(|n| self.is_allowed(n))
            .collect()
    }

    fn is_allowed(&self, name: &str) -> bool {
        self.allowlist.as_ref().is_none_or(|set| set.contains(name))
    }

    /// Tool descriptors advertised through `tools/list`.
    pub fn tool_descriptors(&self) -> Vec<m::Tool> {
        self.effective_tool_names()
            .into_iter()
            .filter_map(|name| {
                let erased = self.registry.get(&name)?;
                let output_schema = if self.output_mode == OutputMode::Structured {
                    erased.output_schema().map(Arc::new)
                } else {
                    None
                };
                Some(m::Tool {
                    name: name.clone().into(),
                    title: Some(name),
                    description: Some(erased.description().to_string().into()),
                    input_schema: Arc::new(erased.input_schema()),
                    annotations: None,
                    output_schema,
                    icons: None,
                    meta: None,
                })
            })
            .collect()
    }

    /// Run one tool call. Failures become an error result rather than a protocol error.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> m::CallToolResult {
        if !self.is_allowed(name) {
            return m::CallToolResult::error(vec![m::Content::text(format!(
                "Tool '{name}' not enabled on this server"
            ))]);
        }

        let args = serde_json::Value::Object(arguments.unwrap_or_default());
        debug!(tool = name, "tool call");

        match self.registry.dispatch_json(name, args).await {
            Ok(res) => {
                let structured_content = if self.output_mode == OutputMode::Structured
                    && self
                        .registry
                        .get(name)
                        .and_then(|t| t.output_schema())
                        .is_some()
                {
                    Some(res.data)
                } else {
                    None
                };
                m::CallToolResult {
                    content: vec![m::Content::text(res.text)],
                    structured_content,
                    is_error: Some(false),
                    meta: None,
                }
            }
            Err(e) => {
                warn!(tool = name, error = %e, "tool call failed");
                m::CallToolResult::error(vec![m::Content::text(e.to_string())])
            }
        }
    }
}

// Allow manual_async_fn because the trait signature uses `impl Future` return types
#[allow(clippy::manual_async_fn)]
impl ServerHandler for RegistryServer {
    fn get_info(&self) -> m::ServerInfo {
        m::ServerInfo {
            server_info: m::Implementation {
                name: self.name.clone(),
                title: Some(self.name.clone()),
                version: self.version.clone(),
                website_url: None,
                icons: None,
            },
            capabilities: m::ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Search Naver news with search_news; use search_news_detail to also fetch article bodies."
                    .into(),
            ),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _req: Option<m::PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::ListToolsResult, m::ErrorData>> + Send + '_
    {
        async move {
            Ok(m::ListToolsResult {
                tools: self.tool_descriptors(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        req: m::CallToolRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::CallToolResult, m::ErrorData>> + Send + '_
    {
        async move { Ok(self.call(&req.name, req.arguments).await) }
    }

    fn ping(
        &self,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<(), m::ErrorData>> + Send + '_ {
        async { Ok(()) }
    }
}
