//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the
//! [`ToolRegistry`]. The registry is built once and shared by every
//! connection and transport.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::ToolRegistry;

const INSTRUCTIONS: &str = "Stateless data-transformation tools: parse and convert JSON5, YAML, \
XML and CSV; extract text, links and metadata from HTML; query and format JSON; diff and \
measure text; hash and encode data; parse URLs; compute statistics. Tool failures are \
reported as text starting with 'Error: '.";

/// The main MCP server handler.
///
/// Cloning is cheap: configuration and registry are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Catalog and dispatcher of all tools.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> crate::Result<Self> {
        let registry = ToolRegistry::builtin()?;

        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Descriptors of all tools, in catalog order.
    pub fn tools(&self) -> Vec<Tool> {
        self.registry.list_tools()
    }

    /// Call a tool by name. Always yields a single-text-block result.
    pub async fn invoke_tool(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        self.registry.invoke(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.invoke_tool(&request.name, arguments).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_info_advertises_tools_only() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "datakit_mcp_server");
    }

    #[test]
    fn test_tools_listed_in_catalog_order() {
        let tools = server().tools();
        assert_eq!(tools.len(), 22);
        assert_eq!(tools[0].name, "parse_json5");
        assert_eq!(tools[21].name, "calculate_stats");
    }

    #[tokio::test]
    async fn test_invoke_tool() {
        let server = server();
        let mut arguments = JsonObject::new();
        arguments.insert("text".to_string(), serde_json::json!("hello"));

        let result = server.invoke_tool("base64_encode", arguments).await;
        assert_eq!(text_of(&result), "aGVsbG8=");
    }

    #[tokio::test]
    async fn test_clones_share_registry() {
        let server = server();
        let clone = server.clone();
        assert!(Arc::ptr_eq(server.registry(), clone.registry()));

        let result = clone.invoke_tool("nope", JsonObject::new()).await;
        assert_eq!(text_of(&result), "Error: Unknown tool: nope");
    }
}
