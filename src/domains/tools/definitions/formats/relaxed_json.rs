//! Relaxed JSON parsing tool.
//!
//! Accepts JSON5 input (comments, trailing commas, unquoted keys,
//! single-quoted strings) and returns the equivalent strict JSON.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the JSON5 parse tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ParseJson5Params {
    /// JSON5 document to parse.
    pub content: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Parse JSON5 tool - converts relaxed JSON into pretty-printed strict JSON.
pub struct ParseJson5Tool;

impl ToolDefinition for ParseJson5Tool {
    const NAME: &'static str = "parse_json5";
    const DESCRIPTION: &'static str = "Parse relaxed JSON (JSON5: comments, trailing commas, unquoted keys, single-quoted strings) and return it as formatted strict JSON.";

    type Params = ParseJson5Params;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let value: Value =
            json5::from_str(&params.content).map_err(|e| ToolError::parse("JSON5", e))?;
        to_pretty_json(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(content: &str) -> ToolResult<String> {
        ParseJson5Tool::execute(ParseJson5Params {
            content: content.to_string(),
        })
    }

    #[test]
    fn test_parse_relaxed_syntax() {
        let input = r#"{
            // a comment
            name: 'widget',
            tags: ["a", "b",],
        }"#;
        let output = run(input).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "name": "widget", "tags": ["a", "b"] })
        );
    }

    #[test]
    fn test_output_is_indented() {
        let output = run("{a: 'x'}").unwrap();
        assert_eq!(output, "{\n  \"a\": \"x\"\n}");
    }

    #[test]
    fn test_malformed_input() {
        let err = run("{a: }").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse JSON5"));
    }
}
