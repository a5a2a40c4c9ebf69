//! MCP server integration for the news tools.
//!
//! [`RegistryServer`] is an rmcp [`ServerHandler`] that serves every tool in a
//! [`news_tools_core::ToolRegistry`], with optional allowlist filtering.

mod server;

pub use server::{OutputMode, RegistryServer};

// Re-export rmcp types for convenience
pub use rmcp::transport::stdio;
pub use rmcp::{ServerHandler, service::ServiceExt};
