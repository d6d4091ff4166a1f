//! Base64 encode and decode tools (standard alphabet, padded).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::ToolDefinition;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the base64 encode tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Base64EncodeParams {
    /// Text to encode (UTF-8 bytes).
    pub text: String,
}

/// Parameters for the base64 decode tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Base64DecodeParams {
    /// Base64 input. Surrounding whitespace is ignored.
    pub encoded: String,
}

// ============================================================================
// Tool Definitions
// ============================================================================

/// Base64 encode tool.
pub struct Base64EncodeTool;

impl ToolDefinition for Base64EncodeTool {
    const NAME: &'static str = "base64_encode";
    const DESCRIPTION: &'static str = "Encode text as standard base64.";

    type Params = Base64EncodeParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        Ok(STANDARD.encode(params.text.as_bytes()))
    }
}

/// Base64 decode tool.
pub struct Base64DecodeTool;

impl ToolDefinition for Base64DecodeTool {
    const NAME: &'static str = "base64_decode";
    const DESCRIPTION: &'static str =
        "Decode standard base64 to text. Invalid UTF-8 sequences are replaced.";

    type Params = Base64DecodeParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let bytes = STANDARD
            .decode(params.encoded.trim())
            .map_err(|e| ToolError::parse("base64", e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(text: &str) -> String {
        Base64EncodeTool::execute(Base64EncodeParams {
            text: text.to_string(),
        })
        .unwrap()
    }

    fn decode(encoded: &str) -> ToolResult<String> {
        Base64DecodeTool::execute(Base64DecodeParams {
            encoded: encoded.to_string(),
        })
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode("hello"), "aGVsbG8=");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("aGVsbG8=").unwrap(), "hello");
        assert_eq!(decode("  aGVsbG8=\n").unwrap(), "hello");
        assert_eq!(decode(&encode("héllo ✓")).unwrap(), "héllo ✓");
    }

    #[test]
    fn test_decode_lossy_utf8() {
        // 0xff 0xfe
        assert_eq!(decode("//4=").unwrap(), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn test_decode_invalid_input() {
        let err = decode("not base64!").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse base64"));
    }
}
