//! CSS selector query tool.

use schemars::JsonSchema;
use scraper::Html;
use serde::Deserialize;
use serde_json::Value;

use super::{element_text, parse_selector};
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

/// Parameters for the selector query tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QuerySelectorParams {
    /// HTML document or fragment.
    pub html: String,

    /// CSS selector, e.g. `div.item > a`.
    pub selector: String,

    /// Attribute to return instead of the element text.
    #[serde(default)]
    pub attribute: Option<String>,
}

/// Query selector tool - returns text or an attribute for every match.
pub struct QuerySelectorTool;

impl ToolDefinition for QuerySelectorTool {
    const NAME: &'static str = "query_selector";
    const DESCRIPTION: &'static str = "Select elements from HTML with a CSS selector. Returns a JSON array with the trimmed text of each match, or the value of `attribute` (null when absent), in document order.";

    type Params = QuerySelectorParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let selector = parse_selector(&params.selector)?;
        let document = Html::parse_document(&params.html);

        let values: Vec<Value> = document
            .select(&selector)
            .map(|element| match params.attribute.as_deref() {
                Some(attribute) => element
                    .value()
                    .attr(attribute)
                    .map_or(Value::Null, |v| Value::String(v.to_string())),
                None => Value::String(element_text(element)),
            })
            .collect();

        to_pretty_json(&values)
    }
}
