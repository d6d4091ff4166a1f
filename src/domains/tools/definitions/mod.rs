//! Tool definitions module.
//!
//! Each tool family lives in its own submodule; [`all_tools`] lists every
//! built-in tool in catalog order.

pub mod data;
pub mod encoding;
pub mod formats;
pub mod markup;
pub mod numeric;
pub mod text;
pub mod url_parts;

use std::sync::Arc;

pub use data::{FormatJsonTool, MinifyJsonTool, QueryJsonTool};
pub use encoding::{Base64DecodeTool, Base64EncodeTool, GenerateUuidTool, HashTextTool};
pub use formats::{
    ParseCsvTool, ParseJson5Tool, ParseXmlTool, ParseYamlTool, ToCsvTool, ToYamlTool,
};
pub use markup::{ExtractLinksTool, HtmlMetadataTool, HtmlToTextTool, QuerySelectorTool};
pub use numeric::CalculateStatsTool;
pub use text::{DiffTextTool, EscapeRegexTool, TextStatsTool};
pub use url_parts::ParseUrlTool;

use super::handlers::ToolHandler;

/// Every built-in tool, in the order `tools/list` reports them.
pub fn all_tools() -> Vec<Arc<dyn ToolHandler>> {
    vec![
        // Structured formats
        Arc::new(ParseJson5Tool),
        Arc::new(ParseYamlTool),
        Arc::new(ToYamlTool),
        Arc::new(ParseXmlTool),
        Arc::new(ParseCsvTool),
        Arc::new(ToCsvTool),
        // HTML
        Arc::new(HtmlToTextTool),
        Arc::new(ExtractLinksTool),
        Arc::new(QuerySelectorTool),
        Arc::new(HtmlMetadataTool),
        // JSON
        Arc::new(QueryJsonTool),
        Arc::new(FormatJsonTool),
        Arc::new(MinifyJsonTool),
        // Text
        Arc::new(DiffTextTool),
        Arc::new(TextStatsTool),
        Arc::new(EscapeRegexTool),
        // Encoding
        Arc::new(HashTextTool),
        Arc::new(Base64EncodeTool),
        Arc::new(Base64DecodeTool),
        Arc::new(GenerateUuidTool),
        // Misc
        Arc::new(ParseUrlTool),
        Arc::new(CalculateStatsTool),
    ]
}
