//! Tools domain module.
//!
//! Tools are stateless data transformations called by MCP clients. Every
//! tool takes a JSON argument object and answers with a single text block.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, grouped by family
//! - `handlers.rs` - `ToolDefinition` / `ToolHandler` traits and outcomes
//! - `registry.rs` - Tool catalog and dispatcher
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a params struct deriving `Deserialize` and `JsonSchema`
//! 2. Implement `ToolDefinition` for a unit struct
//! 3. Add it to `definitions::all_tools()`

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::{ToolError, ToolResult};
pub use handlers::*;
pub use registry::ToolRegistry;
