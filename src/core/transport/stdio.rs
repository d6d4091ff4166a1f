//! STDIO transport: a single MCP session over stdin/stdout.
//!
//! stdout carries protocol frames only, so logging must stay on stderr.

use rmcp::ServiceExt;
use tracing::{debug, info};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve one session until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(format!("stdio handshake failed: {}", e)))?;
        info!("Session established on stdin/stdout");

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::service(format!("stdio session aborted: {}", e)))?;
        debug!(?reason, "Session ended");

        Ok(())
    }
}
