//! Error types and handling for the MCP server.
//!
//! This module defines the unified error type used while bootstrapping and
//! running the server. Tool failures never surface here during a call; they
//! are turned into error text by the dispatcher.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The tool catalog could not be assembled.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// The transport failed to start or stopped abnormally.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Settings rejected by [`Config::validate`](super::Config::validate).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_tool_error_conversion() {
        let err: Error = ToolError::internal("duplicate").into();
        assert!(matches!(err, Error::Tool(_)));
        assert!(err.to_string().starts_with("Tool error: "));
    }

    #[test]
    fn test_transport_error_conversion() {
        let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let err: Error = TransportError::bind("127.0.0.1:1", source).into();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.to_string().starts_with("Transport error: "));
    }

    #[test]
    fn test_config_error_message() {
        assert_eq!(
            Error::config("bad port").to_string(),
            "Configuration error: bad port"
        );
    }
}
