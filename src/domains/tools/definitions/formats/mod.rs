//! Structured-format conversion tools.
//!
//! - `relaxed_json`: JSON5 → strict JSON
//! - `yaml`: YAML ⇄ JSON
//! - `xml`: XML → JSON
//! - `delimited`: CSV/TSV ⇄ JSON

pub mod delimited;
pub mod relaxed_json;
pub mod xml;
pub mod yaml;

pub use delimited::{ParseCsvParams, ParseCsvTool, ToCsvParams, ToCsvTool};
pub use relaxed_json::{ParseJson5Params, ParseJson5Tool};
pub use xml::{ParseXmlParams, ParseXmlTool};
pub use yaml::{ParseYamlParams, ParseYamlTool, ToYamlParams, ToYamlTool};
