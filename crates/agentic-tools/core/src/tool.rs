//! The tool trait.

use crate::error::ToolError;
use crate::fmt::TextFormat;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A named async operation exposed to MCP hosts.
///
/// Input is deserialized from the host's JSON arguments and described to the host
/// with a JSON schema; output is serialized for structured content and rendered
/// with [`TextFormat`] for the text content.
///
/// ```ignore
/// #[derive(Clone)]
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     type Input = EchoInput;
///     type Output = String;
///     const NAME: &'static str = "echo";
///     const DESCRIPTION: &'static str = "Echo the input back";
///
///     fn call(&self, input: EchoInput) -> BoxFuture<'static, Result<String, ToolError>> {
///         Box::pin(async move { Ok(input.text) })
///     }
/// }
/// ```
pub trait Tool: Send + Sync + 'static {
    /// Arguments accepted by the tool.
    type Input: DeserializeOwned + JsonSchema + Send + 'static;

    /// Result produced by the tool.
    type Output: Serialize + JsonSchema + TextFormat + Send + 'static;

    /// Unique name identifying the tool.
    const NAME: &'static str;

    /// Description shown to the host (and to the model choosing tools).
    const DESCRIPTION: &'static str;

    /// Execute the tool.
    fn call(&self, input: Self::Input) -> BoxFuture<'static, Result<Self::Output, ToolError>>;
}
