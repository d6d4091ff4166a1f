//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The immutable catalog of tool descriptors served by `tools/list`
//! - The dispatcher behind `tools/call`, which never lets a handler failure
//!   escape as a protocol error

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, instrument, warn};

use super::definitions;
use super::error::{ToolError, ToolResult};
use super::handlers::{HandlerOutcome, ToolHandler};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns the dispatch table of all available tools.
///
/// Built once at startup and shared read-only afterwards.
pub struct ToolRegistry {
    /// Handlers in registration order.
    handlers: Vec<Arc<dyn ToolHandler>>,

    /// Position of each handler in `handlers`, by tool name.
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create the registry holding every built-in tool.
    pub fn builtin() -> ToolResult<Self> {
        let mut registry = Self::empty();
        for handler in definitions::all_tools() {
            registry.register(handler)?;
        }
        info!("Registered {} tools", registry.len());
        Ok(registry)
    }

    /// Register a handler. Tool names must be unique.
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) -> ToolResult<()> {
        let name = handler.name();
        if self.index.contains_key(name) {
            return Err(ToolError::internal(format!(
                "Tool registered twice: {}",
                name
            )));
        }
        self.index.insert(name, self.handlers.len());
        self.handlers.push(handler);
        Ok(())
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no tool is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Whether a tool with this name can be dispatched.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Get all tools as Tool models (metadata), in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.handlers.iter().map(|h| h.to_tool()).collect()
    }

    /// Run a tool and capture its outcome.
    ///
    /// Unknown names, handler errors and handler panics all become
    /// [`HandlerOutcome::Failure`].
    #[instrument(skip(self, arguments), fields(tool = %name))]
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> HandlerOutcome {
        let Some(handler) = self.index.get(name).map(|&i| &self.handlers[i]) else {
            warn!("Unknown tool requested: {}", name);
            return HandlerOutcome::failure(ToolError::not_found(name).to_string());
        };

        let outcome = match AssertUnwindSafe(handler.call(arguments))
            .catch_unwind()
            .await
        {
            Ok(result) => HandlerOutcome::from(result),
            Err(_) => HandlerOutcome::failure(format!("Tool '{}' panicked during execution", name)),
        };

        match &outcome {
            HandlerOutcome::Success(text) => info!("Tool succeeded ({} bytes)", text.len()),
            HandlerOutcome::Failure(message) => warn!("Tool failed: {}", message),
        }

        outcome
    }

    /// Invoke a tool and wrap the outcome in a response envelope.
    pub async fn invoke(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        self.dispatch(name, arguments).await.into_call_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::handlers::ToolDefinition;
    use serde::Deserialize;
    use tokio_test::{assert_err, assert_ok};

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[derive(Deserialize, schemars::JsonSchema)]
    struct NoParams {}

    struct PanickingTool;

    impl ToolDefinition for PanickingTool {
        const NAME: &'static str = "panics";
        const DESCRIPTION: &'static str = "Always panics";
        type Params = NoParams;

        fn execute(_params: Self::Params) -> ToolResult<String> {
            panic!("handler bug")
        }
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = assert_ok!(ToolRegistry::builtin());
        let names = registry.tool_names();
        assert_eq!(names.len(), 22);
        for name in [
            "parse_json5",
            "parse_yaml",
            "to_yaml",
            "parse_xml",
            "parse_csv",
            "to_csv",
            "html_to_text",
            "extract_links",
            "query_selector",
            "html_metadata",
            "query_json",
            "diff_text",
            "text_stats",
            "escape_regex",
            "hash_text",
            "base64_encode",
            "base64_decode",
            "generate_uuid",
            "parse_url",
            "format_json",
            "minify_json",
            "calculate_stats",
        ] {
            assert!(names.contains(&name), "missing tool {}", name);
        }
    }

    #[test]
    fn test_listed_tools_match_dispatch_table() {
        let registry = assert_ok!(ToolRegistry::builtin());
        let tools = registry.list_tools();
        assert_eq!(tools.len(), registry.len());
        for tool in &tools {
            assert!(registry.contains(tool.name.as_ref()));
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_listing_is_deterministic() {
        let a = assert_ok!(ToolRegistry::builtin()).tool_names();
        let b = assert_ok!(ToolRegistry::builtin()).tool_names();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ToolRegistry::empty();
        assert_ok!(registry.register(Arc::new(PanickingTool)));
        assert_err!(registry.register(Arc::new(PanickingTool)));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_text() {
        let registry = assert_ok!(ToolRegistry::builtin());
        let result = registry.invoke("does_not_exist", JsonObject::new()).await;
        assert_eq!(result.content.len(), 1);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Error: Unknown tool: does_not_exist");
    }

    #[tokio::test]
    async fn test_handler_error_is_error_text() {
        let registry = assert_ok!(ToolRegistry::builtin());
        let result = registry
            .invoke("calculate_stats", args(serde_json::json!({ "numbers": [] })))
            .await;
        assert!(text_of(&result).starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_missing_argument_is_error_text() {
        let registry = assert_ok!(ToolRegistry::builtin());
        let result = registry.invoke("hash_text", JsonObject::new()).await;
        let text = text_of(&result);
        assert!(text.starts_with("Error: Invalid arguments"));
        assert!(text.contains("text"));
    }

    #[tokio::test]
    async fn test_panic_is_contained() {
        let mut registry = ToolRegistry::empty();
        assert_ok!(registry.register(Arc::new(PanickingTool)));
        let outcome = registry.dispatch("panics", JsonObject::new()).await;
        assert!(outcome.is_failure());
        assert!(outcome.into_text().starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_successful_invocation() {
        let registry = assert_ok!(ToolRegistry::builtin());
        let result = registry
            .invoke(
                "hash_text",
                args(serde_json::json!({ "text": "abc", "algorithm": "sha256" })),
            )
            .await;
        assert_eq!(
            text_of(&result),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
