//! Link extraction tool.
//!
//! Collects the `href` of every `<a>` element in document order. When a base
//! URL is supplied, links are resolved against it and links that cannot be
//! resolved are skipped.

use schemars::JsonSchema;
use scraper::Html;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::parse_selector;
use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the link extraction tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExtractLinksParams {
    /// HTML document or fragment.
    pub html: String,

    /// Absolute URL used to resolve relative links.
    #[serde(default)]
    pub base_url: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Extract links tool.
pub struct ExtractLinksTool;

impl ToolDefinition for ExtractLinksTool {
    const NAME: &'static str = "extract_links";
    const DESCRIPTION: &'static str = "Extract the href of every <a> element as a JSON array, in document order. Relative links are resolved when base_url is given.";

    type Params = ExtractLinksParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let base = params
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(Url::parse)
            .transpose()
            .map_err(|e| ToolError::invalid_arguments(format!("Invalid base_url: {}", e)))?;

        let document = Html::parse_document(&params.html);
        let anchors = parse_selector("a[href]")?;

        let mut links = Vec::new();
        for anchor in document.select(&anchors) {
            let Some(href) = anchor.value().attr("href").map(str::trim) else {
                continue;
            };
            match &base {
                Some(base) => match base.join(href) {
                    Ok(resolved) => links.push(resolved.to_string()),
                    Err(e) => debug!("Skipping unresolvable link {:?}: {}", href, e),
                },
                None => links.push(href.to_string()),
            }
        }

        to_pretty_json(&links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str, base_url: Option<&str>) -> ToolResult<Vec<String>> {
        let output = ExtractLinksTool::execute(ExtractLinksParams {
            html: html.to_string(),
            base_url: base_url.map(str::to_string),
        })?;
        Ok(serde_json::from_str(&output).unwrap())
    }

    #[test]
    fn test_resolves_against_base() {
        let links = run(r#"<a href="/p">P</a>"#, Some("https://example.com")).unwrap();
        assert_eq!(links, vec!["https://example.com/p"]);
    }

    #[test]
    fn test_document_order_without_base() {
        let html = r##"<p><a href="b.html">b</a></p><a>no href</a><a href="#top">top</a>"##;
        assert_eq!(run(html, None).unwrap(), vec!["b.html", "#top"]);
    }

    #[test]
    fn test_absolute_links_kept() {
        let links = run(
            r#"<a href="https://other.org/x">x</a><a href="y">y</a>"#,
            Some("https://example.com/dir/page"),
        )
        .unwrap();
        assert_eq!(
            links,
            vec!["https://other.org/x", "https://example.com/dir/y"]
        );
    }

    #[test]
    fn test_unresolvable_link_is_skipped() {
        let links = run(
            r#"<a href="http://[bad">bad</a><a href="ok">ok</a>"#,
            Some("https://example.com/"),
        )
        .unwrap();
        assert_eq!(links, vec!["https://example.com/ok"]);
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(run("<a href='x'>x</a>", Some("not a url")).is_err());
    }
}
