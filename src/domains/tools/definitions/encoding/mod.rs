//! Hashing, base64 and identifier tools.

pub mod codec;
pub mod hash;
pub mod identifier;

pub use codec::{Base64DecodeParams, Base64DecodeTool, Base64EncodeParams, Base64EncodeTool};
pub use hash::{HashAlgorithm, HashTextParams, HashTextTool};
pub use identifier::{GenerateUuidParams, GenerateUuidTool};
