//! Core traits and types shared by the news MCP tools.
//!
//! - [`Tool`]: a named async operation with typed input and output
//! - [`ToolRegistry`]: type-erased storage with JSON dispatch and schema lookup
//! - [`TextFormat`]: how a tool output is rendered as text for the MCP host
//! - [`ToolError`]: the error every tool call resolves to

pub mod error;
pub mod fmt;
pub mod registry;
pub mod tool;

pub use error::ToolError;
pub use fmt::{TextFormat, pretty_json};
pub use registry::{ErasedTool, FormattedResult, ToolRegistry, ToolRegistryBuilder};
pub use tool::Tool;

// Re-export BoxFuture so tool crates don't need a direct futures dependency for signatures
pub use futures::future::BoxFuture;
