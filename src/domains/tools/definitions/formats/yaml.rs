//! YAML conversion tools.
//!
//! - `parse_yaml`: YAML document → formatted JSON
//! - `to_yaml`: JSON value → YAML document

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the YAML parse tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ParseYamlParams {
    /// YAML document to parse.
    pub content: String,
}

/// Parameters for the YAML serialize tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ToYamlParams {
    /// Value to serialize as YAML.
    pub data: Value,
}

// ============================================================================
// Tool Definitions
// ============================================================================

/// Parse YAML tool.
pub struct ParseYamlTool;

impl ToolDefinition for ParseYamlTool {
    const NAME: &'static str = "parse_yaml";
    const DESCRIPTION: &'static str =
        "Parse a YAML document and return it as formatted JSON. Scalar mapping keys become strings.";

    type Params = ParseYamlParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let value: Value =
            serde_yaml::from_str(&params.content).map_err(|e| ToolError::parse("YAML", e))?;
        to_pretty_json(&value)
    }
}

/// Serialize to YAML tool.
pub struct ToYamlTool;

impl ToolDefinition for ToYamlTool {
    const NAME: &'static str = "to_yaml";
    const DESCRIPTION: &'static str = "Serialize a JSON value (object, array or scalar) as a YAML document.";

    type Params = ToYamlParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        serde_yaml::to_string(&params.data).map_err(|e| ToolError::serialization("YAML", e))
    }
}
