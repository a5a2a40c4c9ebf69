//! Tool registry for JSON dispatch.

use crate::error::ToolError;
use crate::fmt::TextFormat;
use crate::tool::Tool;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use schemars::transform::AddNullable;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Result of a JSON dispatch: the serialized output and its text rendering.
#[derive(Debug, Clone)]
pub struct FormattedResult {
    /// The JSON-serialized output data.
    pub data: Value,
    /// Text produced by the output's [`TextFormat`] implementation.
    pub text: String,
}

/// Type-erased tool for dynamic dispatch.
pub trait ErasedTool: Send + Sync {
    /// Get the tool's name.
    fn name(&self) -> &'static str;

    /// Get the tool's description.
    fn description(&self) -> &'static str;

    /// Input JSON schema (draft 2020-12, object root).
    fn input_schema(&self) -> Map<String, Value>;

    /// Output JSON schema, if the output is an object (MCP requires an object root).
    fn output_schema(&self) -> Option<Map<String, Value>>;

    /// Call the tool with JSON arguments.
    fn call_json(&self, args: Value) -> BoxFuture<'static, Result<FormattedResult, ToolError>>;
}

/// Generate a draft 2020-12 schema for `T` as a JSON object.
pub fn schema_object_for<T: JsonSchema>() -> Map<String, Value> {
    let schema = SchemaSettings::draft2020_12()
        .with_transform(AddNullable::default())
        .into_generator()
        .into_root_schema_for::<T>();
    match schema.to_value() {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn output_schema_for<T: JsonSchema>() -> Option<Map<String, Value>> {
    let map = schema_object_for::<T>();
    match map.get("type") {
        Some(Value::String(t)) if t == "object" => Some(map),
        _ => None,
    }
}

struct Entry<T: Tool + Clone> {
    tool: T,
}

impl<T: Tool + Clone> ErasedTool for Entry<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn description(&self) -> &'static str {
        T::DESCRIPTION
    }

    fn input_schema(&self) -> Map<String, Value> {
        schema_object_for::<T::Input>()
    }

    fn output_schema(&self) -> Option<Map<String, Value>> {
        output_schema_for::<T::Output>()
    }

    fn call_json(&self, args: Value) -> BoxFuture<'static, Result<FormattedResult, ToolError>> {
        // Hosts may omit arguments entirely for tools whose fields all have defaults.
        let args = if args.is_null() {
            Value::Object(Map::new())
        } else {
            args
        };
        let input: T::Input = match serde_json::from_value(args) {
            Ok(input) => input,
            Err(e) => {
                return Box::pin(async move { Err(ToolError::invalid_input(e.to_string())) });
            }
        };
        let fut = self.tool.clone().call(input);
        Box::pin(async move {
            let out = fut.await?;
            let text = out.fmt_text();
            let data = serde_json::to_value(&out).map_err(|e| ToolError::internal(e.to_string()))?;
            Ok(FormattedResult { data, text })
        })
    }
}

/// Registry of tools keyed by name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    map: BTreeMap<String, Arc<dyn ErasedTool>>,
}

impl ToolRegistry {
    /// Create a new registry builder.
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// Tool names in sorted order.
    pub fn list_names(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ErasedTool>> {
        self.map.get(name)
    }

    /// Dispatch a tool call using JSON arguments.
    pub async fn dispatch_json(&self, name: &str, args: Value) -> Result<FormattedResult, ToolError> {
        let entry = self
            .map
            .get(name)
            .ok_or_else(|| ToolError::not_found(format!("Unknown tool: {name}")))?;
        entry.call_json(args).await
    }
}

/// Builder for constructing a [`ToolRegistry`].
#[derive(Default)]
pub struct ToolRegistryBuilder {
    items: Vec<Arc<dyn ErasedTool>>,
}

impl ToolRegistryBuilder {
    /// Register a tool. A later tool with the same name replaces an earlier one.
    pub fn register<T: Tool + Clone>(mut self, tool: T) -> Self {
        self.items.push(Arc::new(Entry { tool }));
        self
    }

    /// Build the registry from registered tools.
    pub fn finish(self) -> ToolRegistry {
        let map = self
            .items
            .into_iter()
            .map(|erased| (erased.name().to_string(), erased))
            .collect();
        ToolRegistry { map }
    }
}
