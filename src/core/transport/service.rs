//! Dispatch from a [`TransportConfig`] to the transport that serves it.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

/// Runs the configured transport until it stops.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Serve `server` over the configured transport.
    ///
    /// Returns when the transport shuts down; an error means it could not
    /// start or failed while running.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!(transport = %self.config, tools = server.registry().len(), "Starting transport");

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => super::stdio::StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(tcp) => super::tcp::TcpTransport::new(tcp).run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(http) => super::http::HttpTransport::new(http).run(server).await,
        }
    }
}
