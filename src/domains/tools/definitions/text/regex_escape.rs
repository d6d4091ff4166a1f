//! Regex escape tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for the regex escape tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EscapeRegexParams {
    /// Text to match literally.
    pub text: String,
}

/// Escape regex tool.
pub struct EscapeRegexTool;

impl ToolDefinition for EscapeRegexTool {
    const NAME: &'static str = "escape_regex";
    const DESCRIPTION: &'static str =
        "Escape all regular expression meta characters so the text matches literally.";

    type Params = EscapeRegexParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        Ok(regex::escape(&params.text))
    }
}
