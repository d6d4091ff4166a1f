//! Delimited-text conversion tools.
//!
//! - `parse_csv`: delimited text → JSON array of rows
//! - `to_csv`: JSON array of rows → delimited text

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

const FORMAT: &str = "CSV";

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_header() -> bool {
    true
}

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the CSV parse tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ParseCsvParams {
    /// Delimited text to parse.
    pub content: String,

    /// Field delimiter, a single ASCII character (default: ",").
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Whether the first row holds column names (default: true).
    #[serde(default = "default_header")]
    pub header: bool,
}

/// Parameters for the CSV serialize tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ToCsvParams {
    /// Rows to write: an array of objects, or an array of arrays.
    pub data: Value,

    /// Field delimiter, a single ASCII character (default: ",").
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Whether to write a header row for object rows (default: true).
    #[serde(default = "default_header")]
    pub header: bool,
}

// ============================================================================
// Tool Definitions
// ============================================================================

/// Parse CSV tool.
pub struct ParseCsvTool;

impl ToolDefinition for ParseCsvTool {
    const NAME: &'static str = "parse_csv";
    const DESCRIPTION: &'static str = "Parse delimited text (CSV, TSV, ...) into a JSON array. With a header row each record becomes an object keyed by column name, otherwise an array of fields. All fields are returned as strings.";

    type Params = ParseCsvParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let delimiter = delimiter_byte(&params.delimiter)?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(params.header)
            .from_reader(params.content.as_bytes());

        let mut rows = Vec::new();
        if params.header {
            let headers = reader
                .headers()
                .map_err(|e| ToolError::parse(FORMAT, e))?
                .clone();
            for record in reader.records() {
                let record = record.map_err(|e| ToolError::parse(FORMAT, e))?;
                let row: Map<String, Value> = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(name, field)| (name.to_string(), Value::String(field.to_string())))
                    .collect();
                rows.push(Value::Object(row));
            }
        } else {
            for record in reader.records() {
                let record = record.map_err(|e| ToolError::parse(FORMAT, e))?;
                rows.push(Value::Array(
                    record.iter().map(|f| Value::String(f.to_string())).collect(),
                ));
            }
        }

        to_pretty_json(&rows)
    }
}

/// Serialize to CSV tool.
pub struct ToCsvTool;

impl ToolDefinition for ToCsvTool {
    const NAME: &'static str = "to_csv";
    const DESCRIPTION: &'static str = "Write a JSON array as delimited text. Object rows use the union of their keys as columns (first-seen order); array rows are written as-is. Nested values are written as JSON.";

    type Params = ToCsvParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        let delimiter = delimiter_byte(&params.delimiter)?;
        let Value::Array(rows) = &params.data else {
            return Err(ToolError::invalid_arguments(
                "data must be an array of objects or an array of arrays",
            ));
        };

        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .terminator(csv::Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(Vec::new());

        if rows.iter().all(Value::is_object) {
            let columns = collect_columns(rows);
            if params.header && !columns.is_empty() {
                writer
                    .write_record(&columns)
                    .map_err(|e| ToolError::serialization(FORMAT, e))?;
            }
            for row in rows {
                let fields: Vec<String> = columns
                    .iter()
                    .map(|column| row.get(column).map(cell_text).unwrap_or_default())
                    .collect();
                writer
                    .write_record(&fields)
                    .map_err(|e| ToolError::serialization(FORMAT, e))?;
            }
        } else if rows.iter().all(Value::is_array) {
            for row in rows.iter().filter_map(Value::as_array) {
                let fields: Vec<String> = row.iter().map(cell_text).collect();
                writer
                    .write_record(&fields)
                    .map_err(|e| ToolError::serialization(FORMAT, e))?;
            }
        } else {
            return Err(ToolError::invalid_arguments(
                "rows must be all objects or all arrays",
            ));
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ToolError::execution_failed(format!("CSV writer flush failed: {e}")))?;
        let text = String::from_utf8(bytes).map_err(|e| ToolError::internal(e.to_string()))?;
        Ok(text.trim_end_matches('\n').to_string())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Validate a delimiter argument and return it as a byte.
///
/// The quote character and line terminators are reserved by the CSV grammar.
fn delimiter_byte(delimiter: &str) -> ToolResult<u8> {
    match delimiter.as_bytes() {
        [b'"' | b'\r' | b'\n'] => Err(ToolError::invalid_arguments(format!(
            "delimiter {:?} is reserved (quote or line terminator)",
            delimiter
        ))),
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(ToolError::invalid_arguments(format!(
            "delimiter must be a single ASCII character, got {:?}",
            delimiter
        ))),
    }
}

/// Column names across all object rows, in first-seen order.
fn collect_columns(rows: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows.iter().filter_map(Value::as_object) {
        for key in row.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
