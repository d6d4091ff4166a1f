//! Tool handler abstractions.
//!
//! Every tool is a unit struct implementing [`ToolDefinition`]: a name, a
//! description, a typed parameter struct and a pure `execute` function. The
//! blanket [`ToolHandler`] impl turns it into the object-safe handler the
//! registry stores, so the advertised schema and the argument narrowing are
//! always derived from the same `Params` type.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};

use super::error::{ToolError, ToolResult};

// ============================================================================
// Handler traits
// ============================================================================

/// Static description of a single tool.
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool. Also the source of its input schema.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool on already narrowed arguments.
    fn execute(params: Self::Params) -> ToolResult<String>;
}

/// Object-safe handler stored in the registry dispatch table.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &'static str;

    /// Get the descriptor advertised in `tools/list`.
    fn to_tool(&self) -> Tool;

    /// Execute the tool with the raw argument bag.
    async fn call(&self, arguments: JsonObject) -> ToolResult<String>;
}

#[async_trait]
impl<T: ToolDefinition> ToolHandler for T {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: T::NAME.into(),
            description: Some(T::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<T::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    async fn call(&self, arguments: JsonObject) -> ToolResult<String> {
        let params = parse_params::<T::Params>(arguments)?;
        T::execute(params)
    }
}

/// Narrow an untyped argument bag into a tool's parameter struct.
///
/// Missing required fields, wrong value types and unknown enum choices are
/// reported as invalid arguments. Extra fields are ignored.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> ToolResult<P> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Serialize a tool result as 2-space indented JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> ToolResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| ToolError::serialization("JSON", e))
}

// ============================================================================
// Handler outcome
// ============================================================================

/// Result of a single tool invocation, before it is wrapped for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// The handler produced its result text.
    Success(String),

    /// The handler (or the lookup) failed with this message.
    Failure(String),
}

impl HandlerOutcome {
    /// Marker that starts the text of every failed invocation.
    pub const ERROR_PREFIX: &'static str = "Error: ";

    /// Create a failed outcome.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Text sent back to the client.
    pub fn into_text(self) -> String {
        match self {
            Self::Success(text) => text,
            Self::Failure(message) => format!("{}{}", Self::ERROR_PREFIX, message),
        }
    }

    /// Wrap the outcome into a response envelope with exactly one text block.
    ///
    /// Failures are not flagged with `isError`; clients look for the
    /// `"Error: "` prefix instead.
    pub fn into_call_result(self) -> CallToolResult {
        CallToolResult::success(vec![Content::text(self.into_text())])
    }
}

impl From<ToolResult<String>> for HandlerOutcome {
    fn from(result: ToolResult<String>) -> Self {
        match result {
            Ok(text) => Self::Success(text),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}
