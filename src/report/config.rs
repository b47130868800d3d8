use std::path::PathBuf;

use super::error::{ReportError, Result};
use super::strategy::Strategy;

/// Configuration for a two-condition dominance report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory of run summaries for the first condition.
    pub condition_a_dir: PathBuf,
    /// Directory of run summaries for the second condition.
    pub condition_b_dir: PathBuf,
    /// Label for the first condition in rendered output.
    pub label_a: String,
    /// Label for the second condition in rendered output.
    pub label_b: String,
    /// Strategy whose takeover counts as a win in the first condition.
    pub focal_a: Strategy,
    /// Strategy whose takeover counts as a win in the second condition.
    pub focal_b: Strategy,
    /// Run files are the directory entries whose name ends with this suffix.
    pub suffix: String,
    /// Fixed number of runs each condition is expected to contain. Win rates
    /// divide by this, not by the number of files that parsed.
    pub expected_runs: usize,
    /// Optional directory to save rendered results.
    pub output_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            condition_a_dir: PathBuf::from("data/tft-ad"),
            condition_b_dir: PathBuf::from("data/mr-ad"),
            label_a: "TFT".to_string(),
            label_b: "MR".to_string(),
            focal_a: Strategy::TitForTat,
            focal_b: Strategy::MajorityResponse,
            suffix: "count.csv".to_string(),
            expected_runs: 100,
            output_dir: None,
        }
    }
}

impl ReportConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the report configuration
    pub fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            return Err(ReportError::ValidationError(
                "suffix must not be empty".to_string(),
            ));
        }

        if self.expected_runs == 0 {
            return Err(ReportError::ValidationError(
                "expected_runs must be greater than 0".to_string(),
            ));
        }

        if self.label_a.is_empty() || self.label_b.is_empty() {
            return Err(ReportError::ValidationError(
                "condition labels must not be empty".to_string(),
            ));
        }

        if self.label_a == self.label_b {
            return Err(ReportError::ValidationError(format!(
                "condition labels must be distinct, both are \"{}\"",
                self.label_a
            )));
        }

        Ok(())
    }
}
