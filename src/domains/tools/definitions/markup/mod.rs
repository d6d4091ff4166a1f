//! HTML extraction tools.
//!
//! All tools parse the input with an HTML5 parser, so malformed markup is
//! recovered the way a browser would rather than rejected.

pub mod links;
pub mod metadata;
pub mod selector;
pub mod text;

pub use links::{ExtractLinksParams, ExtractLinksTool};
pub use metadata::{HtmlMetadataParams, HtmlMetadataTool};
pub use selector::{QuerySelectorParams, QuerySelectorTool};
pub use text::{HtmlToTextParams, HtmlToTextTool};

use scraper::{ElementRef, Selector};

use crate::domains::tools::error::{ToolError, ToolResult};

/// Compile a CSS selector supplied by the caller.
pub(crate) fn parse_selector(selector: &str) -> ToolResult<Selector> {
    Selector::parse(selector).map_err(|e| {
        ToolError::invalid_arguments(format!("Invalid selector '{}': {}", selector, e))
    })
}

/// Text content of an element with whitespace runs collapsed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
