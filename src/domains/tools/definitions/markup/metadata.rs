//! Page metadata tool.
//!
//! Summarizes an HTML page: title, meta description, top-level headings and
//! link/image counts.

use schemars::JsonSchema;
use scraper::Html;
use serde::{Deserialize, Serialize};

use super::{element_text, parse_selector};
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the page metadata tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HtmlMetadataParams {
    /// HTML document.
    pub html: String,
}

/// Metadata extracted from a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub headings: Headings,
    pub link_count: usize,
    pub image_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// HTML metadata tool.
pub struct HtmlMetadataTool;

impl ToolDefinition for HtmlMetadataTool {
    const NAME: &'static str = "html_metadata";
    const DESCRIPTION: &'static str = "Summarize an HTML page as JSON: title, meta description, h1-h3 headings, and the number of links and images.";

    type Params = HtmlMetadataParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let document = Html::parse_document(&params.html);
        to_pretty_json(&extract(&document)?)
    }
}

fn extract(document: &Html) -> ToolResult<PageMetadata> {
    let texts = |css: &str| -> ToolResult<Vec<String>> {
        let selector = parse_selector(css)?;
        Ok(document
            .select(&selector)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .collect())
    };
    let count = |css: &str| -> ToolResult<usize> {
        Ok(document.select(&parse_selector(css)?).count())
    };

    let description_selector = parse_selector(r#"meta[name="description"]"#)?;
    let description = document
        .select(&description_selector)
        .find_map(|meta| meta.value().attr("content"))
        .map(|content| content.trim().to_string());

    Ok(PageMetadata {
        title: texts("title")?.into_iter().next(),
        description,
        headings: Headings {
            h1: texts("h1")?,
            h2: texts("h2")?,
            h3: texts("h3")?,
        },
        link_count: count("a[href]")?,
        image_count: count("img")?,
    })
}
