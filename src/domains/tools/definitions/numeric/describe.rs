//! Descriptive statistics tool.
//!
//! Variance is the population variance. The median of an even-sized sample
//! is the mean of the two middle values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::{ToolDefinition, to_pretty_json};

/// Parameters for the statistics tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculateStatsParams {
    /// Sample values. Must not be empty.
    pub numbers: Vec<f64>,
}

/// Summary statistics of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub range: f64,
}

/// Compute summary statistics. Fails on an empty sample.
pub fn summarize(numbers: &[f64]) -> ToolResult<Summary> {
    if numbers.is_empty() {
        return Err(ToolError::invalid_arguments(
            "numbers must contain at least one value",
        ));
    }

    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let sum: f64 = sorted.iter().sum();
    let mean = sum / count as f64;
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;
    let min = sorted[0];
    let max = sorted[count - 1];

    Ok(Summary {
        count,
        sum,
        mean,
        median,
        min,
        max,
        variance,
        std_dev: variance.sqrt(),
        range: max - min,
    })
}

/// Calculate statistics tool.
pub struct CalculateStatsTool;

impl ToolDefinition for CalculateStatsTool {
    const NAME: &'static str = "calculate_stats";
    const DESCRIPTION: &'static str = "Compute count, sum, mean, median, min, max, population variance, standard deviation and range of a list of numbers.";

    type Params = CalculateStatsParams;

    fn execute(params: Self::Params) -> ToolResult<String> {
        to_pretty_json(&summarize(&params.numbers)?)
    }
}
