//! Transports that carry MCP sessions to the shared [`McpServer`].
//!
//! | feature | transport | sessions |
//! |---------|-----------|----------|
//! | `stdio` (default) | stdin/stdout | one, for the life of the process |
//! | `tcp` | line-delimited JSON-RPC over TCP | one per connection |
//! | `http` | JSON-RPC over HTTP POST, axum | per process, no streaming |
//!
//! [`TransportService`] picks the implementation matching the
//! [`TransportConfig`] variant. Only transport failures stop the process.
//!
//! [`McpServer`]: crate::core::McpServer

mod config;
mod error;
mod service;

#[cfg(feature = "stdio")]
pub mod stdio;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "http")]
pub mod http;

pub use config::TransportConfig;
#[cfg(feature = "http")]
pub use config::{DEFAULT_HTTP_PORT, DEFAULT_RPC_PATH, HttpConfig};
#[cfg(feature = "tcp")]
pub use config::{DEFAULT_TCP_PORT, TcpConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
