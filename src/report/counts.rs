use serde::{Deserialize, Serialize};

use super::strategy::Outcome;

/// Outcome tallies for a single experimental condition.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionCounts {
    /// Runs whose final dominant strategy was the condition's focal strategy.
    pub focal_wins: usize,
    /// Runs that ended dominated by the always-defect baseline.
    pub always_defect_wins: usize,
    /// Runs dominated by any other strategy, or with an unreadable identifier.
    pub other: usize,
    /// Files that matched the suffix and parsed cleanly.
    pub files_scanned: usize,
    /// Files that matched the suffix but were skipped as malformed.
    pub files_skipped: usize,
}

impl ConditionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the classified outcome of one parsed run file.
    pub fn record(&mut self, outcome: Outcome) {
        self.files_scanned += 1;
        match outcome {
            Outcome::FocalWin => self.focal_wins += 1,
            Outcome::AlwaysDefectWin => self.always_defect_wins += 1,
            Outcome::Other => self.other += 1,
        }
    }

    /// Record a file that matched the suffix but could not be used.
    pub fn record_skip(&mut self) {
        self.files_skipped += 1;
    }

    /// Wins for the condition's focal strategy.
    pub fn wins(&self) -> usize {
        self.focal_wins
    }

    /// Everything that is not a focal win.
    pub fn losses(&self) -> usize {
        self.always_defect_wins + self.other
    }

    /// Total classified runs (wins plus losses).
    pub fn total(&self) -> usize {
        self.wins() + self.losses()
    }

    /// Win rate against the fixed expected run count.
    ///
    /// The divisor is `expected_runs`, not the number of files that actually
    /// parsed: 50 wins among 80 valid files with 100 expected runs is 0.50.
    /// Callers are expected to warn when the counts disagree with
    /// `expected_runs`; see [`DominanceReport::run`](super::DominanceReport::run).
    pub fn win_rate(&self, expected_runs: usize) -> f64 {
        if expected_runs == 0 {
            return 0.0;
        }
        self.wins() as f64 / expected_runs as f64
    }
}
