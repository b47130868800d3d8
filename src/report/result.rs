use std::path::Path;

use serde::{Deserialize, Serialize};

use super::config::ReportConfig;
use super::counts::ConditionCounts;
use super::error::{ReportError, Result};
use super::fisher::{ContingencyTable, FisherExact};
use super::strategy::Strategy;

/// Outcome summary for a single condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionSummary {
    /// Label for this condition in rendered output.
    pub label: String,
    /// Strategy whose takeover counted as a win.
    pub focal: Strategy,
    /// Raw outcome tallies.
    pub counts: ConditionCounts,
    /// Focal wins divided by the fixed expected run count.
    pub win_rate: f64,
}

/// Results of a dominance report run.
#[derive(Debug, Clone)]
pub struct ReportResult {
    config: ReportConfig,
    condition_a: ConditionSummary,
    condition_b: ConditionSummary,
    table: ContingencyTable,
    fisher: FisherExact,
}

/// Serializable view saved to results.json.
#[derive(Serialize)]
struct JsonReport<'a> {
    condition_a: &'a ConditionSummary,
    condition_b: &'a ConditionSummary,
    contingency_table: &'a ContingencyTable,
    fisher: &'a FisherExact,
}

impl ReportResult {
    pub fn new(
        config: ReportConfig,
        counts_a: ConditionCounts,
        counts_b: ConditionCounts,
        table: ContingencyTable,
        fisher: FisherExact,
    ) -> Self {
        let condition_a = ConditionSummary {
            label: config.label_a.clone(),
            focal: config.focal_a,
            win_rate: counts_a.win_rate(config.expected_runs),
            counts: counts_a,
        };
        let condition_b = ConditionSummary {
            label: config.label_b.clone(),
            focal: config.focal_b,
            win_rate: counts_b.win_rate(config.expected_runs),
            counts: counts_b,
        };

        Self {
            config,
            condition_a,
            condition_b,
            table,
            fisher,
        }
    }

    pub fn condition_a(&self) -> &ConditionSummary {
        &self.condition_a
    }

    pub fn condition_b(&self) -> &ConditionSummary {
        &self.condition_b
    }

    pub fn table(&self) -> &ContingencyTable {
        &self.table
    }

    pub fn fisher(&self) -> &FisherExact {
        &self.fisher
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Format results in the classic printed form: win rates to two
    /// decimals, odds ratio to two, p-value to four, then raw counts.
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        for cond in [&self.condition_a, &self.condition_b] {
            output.push_str(&format!("{} win rate: {:.2}\n", cond.label, cond.win_rate));
        }
        output.push_str(&format!(
            "Fisher exact test: odds ratio = {:.2}, p-value = {:.4}\n",
            self.fisher.odds_ratio, self.fisher.p_value
        ));

        output.push('\n');
        for cond in [&self.condition_a, &self.condition_b] {
            output.push_str(&format!(
                "{}: {} wins = {}, always-defect wins = {}, other = {} ({} files skipped)\n",
                cond.label,
                cond.focal,
                cond.counts.focal_wins,
                cond.counts.always_defect_wins,
                cond.counts.other,
                cond.counts.files_skipped,
            ));
        }

        output
    }

    /// Format results as Markdown output
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&format!("{}\n", "=".repeat(80)));
        output.push_str("# Dominance Report\n");
        output.push_str(&format!("{}\n\n", "=".repeat(80)));

        // Configuration section
        output.push_str("## Configuration\n\n");
        output.push_str(&format!(
            "- **Condition A**: {} ({}, focal: {})\n",
            self.config.condition_a_dir.display(),
            self.condition_a.label,
            self.condition_a.focal
        ));
        output.push_str(&format!(
            "- **Condition B**: {} ({}, focal: {})\n",
            self.config.condition_b_dir.display(),
            self.condition_b.label,
            self.condition_b.focal
        ));
        output.push_str(&format!("- **Run File Suffix**: {}\n", self.config.suffix));
        output.push_str(&format!(
            "- **Expected Runs per Condition**: {}\n",
            self.config.expected_runs
        ));
        output.push('\n');

        // Per-condition outcomes
        output.push_str("## Outcomes\n\n");
        output.push_str("| Condition | Focal Wins | Always-Defect Wins | Other | Win Rate | Files Skipped |\n");
        output.push_str("|-----------|------------|--------------------|-------|----------|---------------|\n");
        for cond in [&self.condition_a, &self.condition_b] {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {:.2} | {} |\n",
                cond.label,
                cond.counts.focal_wins,
                cond.counts.always_defect_wins,
                cond.counts.other,
                cond.win_rate,
                cond.counts.files_skipped
            ));
        }
        output.push('\n');

        // Significance test
        output.push_str("## Fisher's Exact Test\n\n");
        output.push_str("| | Wins | Losses |\n");
        output.push_str("|---|------|--------|\n");
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            self.condition_a.label, self.table.wins_a, self.table.losses_a
        ));
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            self.condition_b.label, self.table.wins_b, self.table.losses_b
        ));
        output.push('\n');
        output.push_str(&format!(
            "- **Odds Ratio**: {:.2}\n",
            self.fisher.odds_ratio
        ));
        output.push_str(&format!("- **p-value**: {:.4}\n", self.fisher.p_value));

        output
    }

    /// Serialize the report to JSON
    pub fn to_json(&self) -> Result<String> {
        let view = JsonReport {
            condition_a: &self.condition_a,
            condition_b: &self.condition_b,
            contingency_table: &self.table,
            fisher: &self.fisher,
        };
        serde_json::to_string_pretty(&view).map_err(ReportError::from)
    }

    /// Save results to JSON and Markdown files
    pub fn save_to_dir(&self, output_dir: &Path) -> Result<()> {
        // Create output directory if it doesn't exist
        std::fs::create_dir_all(output_dir)?;

        // Save JSON
        let json_path = output_dir.join("results.json");
        let json_output = self.to_json()?;
        std::fs::write(&json_path, json_output)?;

        // Save Markdown
        let md_path = output_dir.join("results.md");
        let md_output = self.to_markdown();
        std::fs::write(&md_path, md_output)?;

        Ok(())
    }
}
