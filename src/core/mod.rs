//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, server lifecycle management,
//! and transport layer abstractions.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

use tracing::info;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportError, TransportService};

/// Validate `config`, build the tool catalog and serve it until the
/// transport stops.
pub async fn serve(config: Config) -> Result<()> {
    config.validate()?;

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config)?;
    info!(
        "Initialized {} v{} with {} tools",
        server.name(),
        server.version(),
        server.registry().len()
    );

    transport.run(server).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_rejects_invalid_config() {
        let mut config = Config::default();
        config.server.name = String::new();

        let err = serve(config).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_serve_rejects_shadowed_rpc_path() {
        let config = Config {
            transport: TransportConfig::Http(transport::HttpConfig {
                rpc_path: "/health".to_string(),
                ..Default::default()
            }),
            ..Config::default()
        };

        let err = serve(config).await.unwrap_err();
        assert!(err.to_string().contains("/health"));
    }

    #[cfg(feature = "tcp")]
    #[tokio::test]
    async fn test_serve_reports_bind_failure_as_transport_error() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let config = Config {
            transport: TransportConfig::Tcp(transport::TcpConfig {
                host: "127.0.0.1".to_string(),
                port,
            }),
            ..Config::default()
        };

        let err = serve(config).await.unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::BindError { .. })));
    }
}
