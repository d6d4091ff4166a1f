//! Numeric tools.

pub mod describe;

pub use describe::{CalculateStatsParams, CalculateStatsTool, Summary, summarize};
