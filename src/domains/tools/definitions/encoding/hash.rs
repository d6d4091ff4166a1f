//! Text hashing tool.

use md5::Md5;
use schemars::JsonSchema;
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::ToolDefinition;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Lowercase hex digest of `data`.
    pub fn hex_digest(self, data: &[u8]) -> String {
        match self {
            Self::Md5 => digest::<Md5>(data),
            Self::Sha1 => digest::<Sha1>(data),
            Self::Sha256 => digest::<Sha256>(data),
            Self::Sha512 => digest::<Sha512>(data),
        }
    }
}

fn digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// Parameters for the hash tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HashTextParams {
    /// Text to hash (UTF-8 bytes).
    pub text: String,

    /// Algorithm: md5, sha1, sha256 or sha512 (default: sha256).
    #[serde(default)]
    pub algorithm: HashAlgorithm,
}

/// Hash text tool.
pub struct HashTextTool;

impl ToolDefinition for HashTextTool {
    const NAME: &'static str = "hash_text";
    const DESCRIPTION: &'static str =
        "Hash text with md5, sha1, sha256 or sha512 and return the lowercase hex digest.";

    type Params = HashTextParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        Ok(params.algorithm.hex_digest(params.text.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        let abc = b"abc";
        assert_eq!(
            HashAlgorithm::Md5.hex_digest(abc),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            HashAlgorithm::Sha1.hex_digest(abc),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            HashAlgorithm::Sha256.hex_digest(abc),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(HashAlgorithm::Sha512.hex_digest(abc).len(), 128);
    }

    #[test]
    fn test_default_algorithm_is_sha256() {
        let params: HashTextParams =
            serde_json::from_value(serde_json::json!({ "text": "" })).unwrap();
        assert_eq!(params.algorithm, HashAlgorithm::Sha256);
        assert_eq!(
            HashTextTool::execute(params).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_unsupported_algorithm_is_rejected() {
        let result = serde_json::from_value::<HashTextParams>(
            serde_json::json!({ "text": "x", "algorithm": "crc32" }),
        );
        assert!(result.is_err());
    }
}
