//! Plain-text tools: diffing, statistics and regex escaping.

pub mod diff;
pub mod regex_escape;
pub mod stats;

pub use diff::{DiffMode, DiffTextParams, DiffTextTool};
pub use regex_escape::{EscapeRegexParams, EscapeRegexTool};
pub use stats::{TextStats, TextStatsParams, TextStatsTool};
