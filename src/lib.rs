//! Data-transformation MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing a
//! catalog of stateless data-transformation tools: structured format
//! conversion, HTML extraction, JSON querying, text diffing, hashing and
//! encoding, URL parsing and descriptive statistics.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and
//!   the transports (STDIO, TCP, HTTP)
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool registry, dispatcher and tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use datakit_mcp_server::{Config, serve};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     serve(Config::from_env()).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, TransportService, serve};
pub use domains::tools::{ToolError, ToolRegistry};
