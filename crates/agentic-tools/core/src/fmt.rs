//! Text rendering of tool outputs.
//!
//! MCP hosts mostly read the text content of a tool result, so every output type
//! decides how it is rendered. Types that have nothing better to offer use
//! [`pretty_json`], which keeps non-ASCII text as-is.

use serde::Serialize;

/// Human-readable rendering of a tool output.
pub trait TextFormat {
    /// Render the value as text.
    fn fmt_text(&self) -> String;
}

/// Pretty-printed JSON, falling back to compact JSON (or an empty object) on failure.
///
/// `serde_json` never escapes non-ASCII characters, so Hangul stays readable.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .or_else(|_| serde_json::to_string(value))
        .unwrap_or_else(|_| "{}".to_string())
}

impl TextFormat for String {
    fn fmt_text(&self) -> String {
        self.clone()
    }
}

impl TextFormat for serde_json::Value {
    fn fmt_text(&self) -> String {
        pretty_json(self)
    }
}
