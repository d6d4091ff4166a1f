//! Text statistics tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

/// Parameters for the text statistics tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TextStatsParams {
    /// Text to measure.
    pub text: String,
}

/// Counts reported for a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub lines: usize,
    pub paragraphs: usize,
}

impl TextStats {
    /// Measure a text. Paragraphs are runs of non-blank lines.
    pub fn measure(text: &str) -> Self {
        let mut paragraphs = 0;
        let mut in_paragraph = false;
        for line in text.lines() {
            let blank = line.trim().is_empty();
            if !blank && !in_paragraph {
                paragraphs += 1;
            }
            in_paragraph = !blank;
        }

        Self {
            characters: text.chars().count(),
            characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            words: text.split_whitespace().count(),
            lines: text.lines().count(),
            paragraphs,
        }
    }
}

/// Text statistics tool.
pub struct TextStatsTool;

impl ToolDefinition for TextStatsTool {
    const NAME: &'static str = "text_stats";
    const DESCRIPTION: &'static str = "Count characters (with and without whitespace), words, lines and paragraphs in a text.";

    type Params = TextStatsParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        to_pretty_json(&TextStats::measure(&params.text))
    }
}
