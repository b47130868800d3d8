use std::path::{Path, PathBuf};

use super::config::ReportConfig;
use super::error::{ReportError, Result};
use super::runner::DominanceReport;
use super::strategy::Strategy;

/// Builder for constructing DominanceReport instances
///
/// # Example
///
/// ```ignore
/// use evo_dominance::report::{ReportBuilder, Strategy};
///
/// let report = ReportBuilder::new()
///     .condition_a("./data/baseline-tft-ad")
///     .condition_b("./data/baseline-mr-ad")
///     .focal_a(Strategy::TitForTat)
///     .focal_b(Strategy::MajorityResponse)
///     .expected_runs(100)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ReportBuilder {
    condition_a_dir: Option<PathBuf>,
    condition_b_dir: Option<PathBuf>,
    label_a: Option<String>,
    label_b: Option<String>,
    focal_a: Option<Strategy>,
    focal_b: Option<Strategy>,
    suffix: Option<String>,
    expected_runs: Option<usize>,
    output_dir: Option<PathBuf>,
}

impl ReportBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory of run summaries for the first condition
    pub fn condition_a<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.condition_a_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set the directory of run summaries for the second condition
    pub fn condition_b<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.condition_b_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set the label for the first condition
    pub fn label_a<S: Into<String>>(mut self, label: S) -> Self {
        self.label_a = Some(label.into());
        self
    }

    /// Set the label for the second condition
    pub fn label_b<S: Into<String>>(mut self, label: S) -> Self {
        self.label_b = Some(label.into());
        self
    }

    /// Set the focal strategy for the first condition
    pub fn focal_a(mut self, focal: Strategy) -> Self {
        self.focal_a = Some(focal);
        self
    }

    /// Set the focal strategy for the second condition
    pub fn focal_b(mut self, focal: Strategy) -> Self {
        self.focal_b = Some(focal);
        self
    }

    /// Set the filename suffix run files are matched against
    pub fn suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Set the fixed expected run count per condition
    pub fn expected_runs(mut self, expected_runs: usize) -> Self {
        self.expected_runs = Some(expected_runs);
        self
    }

    /// Set the output directory for rendered results
    pub fn output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        self.output_dir = Some(output_dir.as_ref().to_path_buf());
        self
    }

    /// Build the DominanceReport
    ///
    /// Returns an error if the configuration is invalid or either condition
    /// directory is missing.
    pub fn build(self) -> Result<DominanceReport> {
        let condition_a_dir = self.condition_a_dir.ok_or_else(|| {
            ReportError::MissingConfig(
                "No directory for condition A. Use condition_a()".to_string(),
            )
        })?;
        let condition_b_dir = self.condition_b_dir.ok_or_else(|| {
            ReportError::MissingConfig(
                "No directory for condition B. Use condition_b()".to_string(),
            )
        })?;

        let defaults = ReportConfig::default();
        let config = ReportConfig {
            condition_a_dir,
            condition_b_dir,
            label_a: self.label_a.unwrap_or(defaults.label_a),
            label_b: self.label_b.unwrap_or(defaults.label_b),
            focal_a: self.focal_a.unwrap_or(defaults.focal_a),
            focal_b: self.focal_b.unwrap_or(defaults.focal_b),
            suffix: self.suffix.unwrap_or(defaults.suffix),
            expected_runs: self.expected_runs.unwrap_or(defaults.expected_runs),
            output_dir: self.output_dir,
        };

        config.validate()?;

        Ok(DominanceReport::new(config))
    }
}
