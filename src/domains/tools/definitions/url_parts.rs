//! URL parsing tool.
//!
//! Splits an absolute URL into its components. Query parameters are
//! percent-decoded into an object; a repeated key keeps its last value.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

/// Parameters for the URL parsing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ParseUrlParams {
    /// Absolute URL.
    pub url: String,
}

/// Components of a parsed URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlParts {
    pub scheme: String,
    pub host: Option<String>,
    /// Explicit port only; default ports for the scheme are omitted.
    pub port: Option<u16>,
    pub path: String,
    pub query: Map<String, Value>,
    pub fragment: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub origin: String,
}

impl From<&Url> for UrlParts {
    fn from(url: &Url) -> Self {
        let mut query = Map::new();
        for (key, value) in url.query_pairs() {
            query.insert(key.into_owned(), Value::String(value.into_owned()));
        }

        Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().map(str::to_string),
            port: url.port(),
            path: url.path().to_string(),
            query,
            fragment: url.fragment().map(str::to_string),
            username: Some(url.username())
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            password: url.password().map(str::to_string),
            origin: url.origin().ascii_serialization(),
        }
    }
}

/// Parse URL tool.
pub struct ParseUrlTool;

impl ToolDefinition for ParseUrlTool {
    const NAME: &'static str = "parse_url";
    const DESCRIPTION: &'static str = "Parse an absolute URL into scheme, host, port, path, query parameters, fragment, credentials and origin.";

    type Params = ParseUrlParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let url = Url::parse(params.url.trim()).map_err(|e| ToolError::parse("URL", e))?;
        to_pretty_json(&UrlParts::from(&url))
    }
}
