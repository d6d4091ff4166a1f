//! Text diff tool.
//!
//! Compares two texts by lines, words or characters and renders the result
//! with one prefix per line: `+` for added text, `-` for removed text and a
//! space for unchanged text.

use schemars::JsonSchema;
use serde::Deserialize;
use similar::{ChangeTag, TextDiff};

use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::ToolDefinition;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Unit of comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Compare line by line.
    #[default]
    Lines,
    /// Compare word by word.
    Words,
    /// Compare character by character.
    Chars,
}

/// Parameters for the diff tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DiffTextParams {
    /// Original text.
    pub text1: String,

    /// Changed text.
    pub text2: String,

    /// Comparison unit: lines, words or chars (default: lines).
    #[serde(default)]
    pub mode: DiffMode,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Diff text tool.
pub struct DiffTextTool;

impl ToolDefinition for DiffTextTool {
    const NAME: &'static str = "diff_text";
    const DESCRIPTION: &'static str = "Compare two texts by lines, words or characters. Each output line is prefixed with '+' (added), '-' (removed) or ' ' (unchanged).";

    type Params = DiffTextParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        Ok(render_diff(&params.text1, &params.text2, params.mode))
    }
}

/// Render the diff of two texts.
///
/// Consecutive changes with the same tag form one run; every line of a run
/// gets the run's prefix.
pub fn render_diff(old: &str, new: &str, mode: DiffMode) -> String {
    let diff = match mode {
        DiffMode::Lines => TextDiff::from_lines(old, new),
        DiffMode::Words => TextDiff::from_words(old, new),
        DiffMode::Chars => TextDiff::from_chars(old, new),
    };

    let mut runs: Vec<(ChangeTag, String)> = Vec::new();
    for change in diff.iter_all_changes() {
        match runs.last_mut() {
            Some((tag, text)) if *tag == change.tag() => text.push_str(change.value()),
            _ => runs.push((change.tag(), change.value().to_string())),
        }
    }

    let mut lines = Vec::new();
    for (tag, text) in &runs {
        let prefix = match tag {
            ChangeTag::Insert => '+',
            ChangeTag::Delete => '-',
            ChangeTag::Equal => ' ',
        };
        lines.extend(text.lines().map(|line| format!("{prefix}{line}")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_diff() {
        let rendered = render_diff("a\nb\nc", "a\nx\nc", DiffMode::Lines);
        assert_eq!(rendered, " a\n-b\n+x\n c");
    }

    #[test]
    fn test_identical_texts() {
        assert_eq!(render_diff("same\ntext", "same\ntext", DiffMode::Lines), " same\n text");
    }

    #[test]
    fn test_word_diff() {
        let rendered = render_diff("the quick fox", "the slow fox", DiffMode::Words);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.contains(&"-quick"));
        assert!(lines.contains(&"+slow"));
        assert!(lines[0].starts_with(" the"));
    }

    #[test]
    fn test_char_diff() {
        let rendered = render_diff("cat", "cut", DiffMode::Chars);
        assert_eq!(rendered, " c\n-a\n+u\n t");
    }

    #[test]
    fn test_added_lines_only() {
        assert_eq!(render_diff("", "one\ntwo\n", DiffMode::Lines), "+one\n+two");
    }

    #[test]
    fn test_mode_from_arguments() {
        let params: DiffTextParams =
            serde_json::from_value(serde_json::json!({ "text1": "a", "text2": "b", "mode": "words" }))
                .unwrap();
        assert_eq!(params.mode, DiffMode::Words);

        let params: DiffTextParams =
            serde_json::from_value(serde_json::json!({ "text1": "a", "text2": "b" })).unwrap();
        assert_eq!(params.mode, DiffMode::Lines);

        let invalid = serde_json::from_value::<DiffTextParams>(
            serde_json::json!({ "text1": "a", "text2": "b", "mode": "bytes" }),
        );
        assert!(invalid.is_err());
    }
}
