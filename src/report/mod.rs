//! Dominance reporting for two-condition evolutionary game experiments.
//!
//! Each condition is a directory of per-run summary files. The final row of
//! every file records which strategy dominated the population when the run
//! ended; this module tallies those outcomes, turns them into win rates, and
//! tests whether the two conditions differ significantly.
//!
//! # Example
//!
//! ```ignore
//! use evo_dominance::report::{ReportBuilder, Strategy};
//!
//! let report = ReportBuilder::new()
//!     .condition_a("./data/baseline-tft-ad")
//!     .condition_b("./data/baseline-mr-ad")
//!     .focal_a(Strategy::TitForTat)
//!     .focal_b(Strategy::MajorityResponse)
//!     .expected_runs(100)
//!     .build()?;
//!
//! let result = report.run()?;
//! print!("{}", result.to_text());
//!
//! // Save results to files
//! result.save_to_dir(&output_dir)?;
//! ```

mod builder;
mod config;
mod counts;
mod error;
mod fisher;
mod result;
mod runner;
mod scan;
mod strategy;

pub use builder::ReportBuilder;
pub use config::ReportConfig;
pub use counts::ConditionCounts;
pub use error::{ReportError, Result};
pub use fisher::{fisher_exact, ContingencyTable, FisherExact};
pub use result::{ConditionSummary, ReportResult};
pub use runner::DominanceReport;
pub use scan::scan_condition;
pub use strategy::{Outcome, Strategy};
