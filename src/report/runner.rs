use tracing::{info, warn};

use super::config::ReportConfig;
use super::counts::ConditionCounts;
use super::error::Result;
use super::fisher::{fisher_exact, ContingencyTable};
use super::result::ReportResult;
use super::scan::scan_condition;

/// A configured two-condition dominance report, ready to run.
#[derive(Debug)]
pub struct DominanceReport {
    config: ReportConfig,
}

impl DominanceReport {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Scan both condition directories, tally outcomes, and compare the
    /// conditions with a two-sided Fisher's exact test.
    ///
    /// A missing condition directory is an error; individual run files that
    /// fail to read or parse are logged and excluded from the counts.
    pub fn run(&self) -> Result<ReportResult> {
        let counts_a = scan_condition(
            &self.config.condition_a_dir,
            &self.config.suffix,
            self.config.focal_a,
        )?;
        self.check_run_count(&self.config.label_a, &counts_a);

        let counts_b = scan_condition(
            &self.config.condition_b_dir,
            &self.config.suffix,
            self.config.focal_b,
        )?;
        self.check_run_count(&self.config.label_b, &counts_b);

        let table = ContingencyTable::new(
            counts_a.wins() as u64,
            counts_a.losses() as u64,
            counts_b.wins() as u64,
            counts_b.losses() as u64,
        );
        let fisher = fisher_exact(&table);

        info!(
            wins_a = table.wins_a,
            losses_a = table.losses_a,
            wins_b = table.wins_b,
            losses_b = table.losses_b,
            odds_ratio = fisher.odds_ratio,
            p_value = fisher.p_value,
            "dominance report complete"
        );

        Ok(ReportResult::new(
            self.config.clone(),
            counts_a,
            counts_b,
            table,
            fisher,
        ))
    }

    /// Win rates divide by the fixed expected run count, so a shortfall of
    /// valid files silently skews them; surface the mismatch.
    fn check_run_count(&self, label: &str, counts: &ConditionCounts) {
        if counts.total() != self.config.expected_runs {
            warn!(
                label,
                valid_runs = counts.total(),
                skipped = counts.files_skipped,
                expected_runs = self.config.expected_runs,
                "valid run count differs from expected_runs; win rate still divides by expected_runs"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::builder::ReportBuilder;
    use crate::report::strategy::Strategy;
    use approx::assert_relative_eq;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    fn test_dir(name: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("evo_dominance_run_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_run_file(dir: &Path, name: &str, dominant_id: i64) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        writeln!(file, "update,num_orgs,dominant_id,dominant_count,diversity").unwrap();
        writeln!(file, "1000,200,{},163,0.21", dominant_id).unwrap();
    }

    #[test_log::test]
    fn test_run_end_to_end() {
        let root = test_dir("end_to_end");
        let dir_a = root.join("tft-ad");
        let dir_b = root.join("mr-ad");
        std::fs::create_dir_all(&dir_a).unwrap();
        std::fs::create_dir_all(&dir_b).unwrap();

        for (i, id) in [5, 5, 5, 0].iter().enumerate() {
            write_run_file(&dir_a, &format!("run{}-count.csv", i), *id);
        }
        for (i, id) in [69, 0, 0, 7].iter().enumerate() {
            write_run_file(&dir_b, &format!("run{}-count.csv", i), *id);
        }

        let report = ReportBuilder::new()
            .condition_a(&dir_a)
            .condition_b(&dir_b)
            .expected_runs(4)
            .build()
            .unwrap();
        let result = report.run().unwrap();

        assert_eq!(result.condition_a().counts.focal_wins, 3);
        assert_eq!(result.condition_a().counts.always_defect_wins, 1);
        assert_eq!(result.condition_b().counts.focal_wins, 1);
        assert_eq!(result.condition_b().counts.always_defect_wins, 2);
        assert_eq!(result.condition_b().counts.other, 1);

        assert_relative_eq!(result.condition_a().win_rate, 0.75);
        assert_relative_eq!(result.condition_b().win_rate, 0.25);

        let table = result.table();
        assert_eq!(
            (table.wins_a, table.losses_a, table.wins_b, table.losses_b),
            (3, 1, 1, 3)
        );

        std::fs::remove_dir_all(&root).ok();
    }

    #[test_log::test]
    fn test_run_warns_but_rates_keep_fixed_divisor() {
        let root = test_dir("fixed_divisor");
        let dir_a = root.join("a");
        let dir_b = root.join("b");
        std::fs::create_dir_all(&dir_a).unwrap();
        std::fs::create_dir_all(&dir_b).unwrap();

        // Only two valid runs against an expected count of four.
        write_run_file(&dir_a, "run0-count.csv", 5);
        write_run_file(&dir_a, "run1-count.csv", 5);
        write_run_file(&dir_b, "run0-count.csv", 69);

        let report = ReportBuilder::new()
            .condition_a(&dir_a)
            .condition_b(&dir_b)
            .expected_runs(4)
            .build()
            .unwrap();
        let result = report.run().unwrap();

        // 2 wins / 4 expected, not 2 / 2 files found.
        assert_relative_eq!(result.condition_a().win_rate, 0.50);
        assert_relative_eq!(result.condition_b().win_rate, 0.25);

        std::fs::remove_dir_all(&root).ok();
    }

    #[test_log::test]
    fn test_run_empty_directories() {
        let root = test_dir("empty");
        let dir_a = root.join("a");
        let dir_b = root.join("b");
        std::fs::create_dir_all(&dir_a).unwrap();
        std::fs::create_dir_all(&dir_b).unwrap();

        let report = ReportBuilder::new()
            .condition_a(&dir_a)
            .condition_b(&dir_b)
            .build()
            .unwrap();
        let result = report.run().unwrap();

        assert_relative_eq!(result.condition_a().win_rate, 0.0);
        assert_relative_eq!(result.condition_b().win_rate, 0.0);
        assert_relative_eq!(result.fisher().p_value, 1.0);

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_run_missing_directory() {
        let root = test_dir("missing");
        let dir_a = root.join("a");
        std::fs::create_dir_all(&dir_a).unwrap();

        let report = ReportBuilder::new()
            .condition_a(&dir_a)
            .condition_b(root.join("does-not-exist"))
            .build()
            .unwrap();
        assert!(report.run().is_err());

        std::fs::remove_dir_all(&root).ok();
    }

    #[test_log::test]
    fn test_always_defect_as_focal() {
        let root = test_dir("ad_focal");
        let dir_a = root.join("a");
        let dir_b = root.join("b");
        std::fs::create_dir_all(&dir_a).unwrap();
        std::fs::create_dir_all(&dir_b).unwrap();

        write_run_file(&dir_a, "run0-count.csv", 0);
        write_run_file(&dir_b, "run0-count.csv", 0);

        let report = ReportBuilder::new()
            .condition_a(&dir_a)
            .condition_b(&dir_b)
            .label_a("AD vs TFT")
            .label_b("AD vs MR")
            .focal_a(Strategy::AlwaysDefect)
            .focal_b(Strategy::AlwaysDefect)
            .expected_runs(1)
            .build()
            .unwrap();
        let result = report.run().unwrap();

        assert_eq!(result.condition_a().counts.focal_wins, 1);
        assert_eq!(result.condition_b().counts.focal_wins, 1);

        std::fs::remove_dir_all(&root).ok();
    }
}
