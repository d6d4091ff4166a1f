//! JSON formatting tools.
//!
//! - `format_json`: re-indent a value
//! - `minify_json`: strip all insignificant whitespace

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::ToolDefinition;

/// Indentation is capped at 10 spaces.
pub const MAX_INDENT: usize = 10;

fn default_indent() -> f64 {
    2.0
}

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the JSON format tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FormatJsonParams {
    /// Value to format.
    pub data: Value,

    /// Spaces per indentation level (default: 2). Fractions are truncated,
    /// values above 10 are capped and values below 1 give a single line.
    #[serde(default = "default_indent")]
    pub indent: f64,
}

/// Parameters for the JSON minify tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MinifyJsonParams {
    /// Value to minify.
    pub data: Value,
}

// ============================================================================
// Tool Definitions
// ============================================================================

/// Format JSON tool.
pub struct FormatJsonTool;

impl ToolDefinition for FormatJsonTool {
    const NAME: &'static str = "format_json";
    const DESCRIPTION: &'static str =
        "Pretty-print a JSON value with the given indentation (default: 2 spaces).";

    type Params = FormatJsonParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        format_with_indent(&params.data, params.indent)
    }
}

/// Minify JSON tool.
pub struct MinifyJsonTool;

impl ToolDefinition for MinifyJsonTool {
    const NAME: &'static str = "minify_json";
    const DESCRIPTION: &'static str = "Serialize a JSON value without any whitespace.";

    type Params = MinifyJsonParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        serde_json::to_string(&params.data).map_err(|e| ToolError::serialization("JSON", e))
    }
}

/// Number of spaces actually used for a requested indent.
fn indent_width(indent: f64) -> usize {
    if indent >= 1.0 {
        indent.min(MAX_INDENT as f64) as usize
    } else {
        0
    }
}

fn format_with_indent(value: &Value, indent: f64) -> ToolResult<String> {
    let width = indent_width(indent);
    if width == 0 {
        return serde_json::to_string(value).map_err(|e| ToolError::serialization("JSON", e));
    }

    let pad = " ".repeat(width);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(pad.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|e| ToolError::serialization("JSON", e))?;

    String::from_utf8(buf).map_err(|e| ToolError::internal(e.to_string()))
}
