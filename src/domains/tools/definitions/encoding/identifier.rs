//! UUID generation tool.

use schemars::JsonSchema;
use serde::Deserialize;
use uuid::Uuid;

use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::ToolDefinition;

/// The UUID tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GenerateUuidParams {}

/// Generate UUID tool.
pub struct GenerateUuidTool;

impl ToolDefinition for GenerateUuidTool {
    const NAME: &'static str = "generate_uuid";
    const DESCRIPTION: &'static str = "Generate a random (version 4) UUID.";

    type Params = GenerateUuidParams;

    fn execute(_params: Self::Params) -> ToolResult<String> {
        Ok(Uuid::new_v4().to_string())
    }
}
