//! HTML to text tool.

use schemars::JsonSchema;
use scraper::Html;
use serde::Deserialize;

use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::ToolDefinition;

/// Elements whose text is never rendered.
const HIDDEN_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Parameters for the HTML to text tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HtmlToTextParams {
    /// HTML document or fragment.
    pub html: String,
}

/// HTML to text tool - flattens the visible text of a document.
pub struct HtmlToTextTool;

impl ToolDefinition for HtmlToTextTool {
    const NAME: &'static str = "html_to_text";
    const DESCRIPTION: &'static str = "Extract the visible text of an HTML document. Script, style and head content is dropped and whitespace is collapsed.";

    type Params = HtmlToTextParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        Ok(visible_text(&Html::parse_document(&params.html)))
    }
}

fn visible_text(document: &Html) -> String {
    let mut words: Vec<&str> = Vec::new();
    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            words.extend(text.split_whitespace());
        }
    }
    words.join(" ")
}
