//! JSON value tools: querying and formatting.

pub mod json_format;
pub mod json_path;

pub use json_format::{FormatJsonParams, FormatJsonTool, MinifyJsonParams, MinifyJsonTool};
pub use json_path::{QueryJsonParams, QueryJsonTool};
