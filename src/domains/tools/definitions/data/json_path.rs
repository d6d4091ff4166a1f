//! JSONPath query tool.
//!
//! Path expressions follow RFC 9535 (`$.store.book[*].author`,
//! `$..price`, `$.items[?@.qty > 1]`).

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use serde_json_path::JsonPath;

use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

/// Parameters for the JSONPath query tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryJsonParams {
    /// Value to query.
    pub data: Value,

    /// JSONPath expression, starting with `$`.
    pub path: String,
}

/// Query JSON tool.
pub struct QueryJsonTool;

impl ToolDefinition for QueryJsonTool {
    const NAME: &'static str = "query_json";
    const DESCRIPTION: &'static str = "Run a JSONPath (RFC 9535) expression against a JSON value and return the matched values as a JSON array.";

    type Params = QueryJsonParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let path = JsonPath::parse(&params.path).map_err(|e| {
            ToolError::invalid_arguments(format!("Invalid JSONPath '{}': {}", params.path, e))
        })?;
        let matches: Vec<&Value> = path.query(&params.data).all();
        to_pretty_json(&matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> Value {
        json!({
            "store": {
                "book": [
                    { "author": "Nigel Rees", "price": 8.95 },
                    { "author": "Evelyn Waugh", "price": 12.99 },
                    { "author": "Herman Melville", "price": 8.99 }
                ],
                "bicycle": { "color": "red", "price": 19.95 }
            }
        })
    }

    fn run(path: &str) -> ToolResult<Value> {
        let output = QueryJsonTool::execute(QueryJsonParams {
            data: store(),
            path: path.to_string(),
        })?;
        Ok(serde_json::from_str(&output).unwrap())
    }

    #[test]
    fn test_wildcard_member() {
        assert_eq!(
            run("$.store.book[*].author").unwrap(),
            json!(["Nigel Rees", "Evelyn Waugh", "Herman Melville"])
        );
    }

    #[test]
    fn test_filter_expression() {
        assert_eq!(
            run("$.store.book[?@.price < 10].author").unwrap(),
            json!(["Nigel Rees", "Herman Melville"])
        );
    }

    #[test]
    fn test_no_match_is_empty_array() {
        assert_eq!(run("$.store.music").unwrap(), json!([]));
    }

    #[test]
    fn test_invalid_expression() {
        let err = run("$.store[").unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
