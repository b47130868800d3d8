use std::path::Path;

use tracing::{debug, warn};

use super::counts::ConditionCounts;
use super::error::Result;
use super::strategy::{Outcome, Strategy};

/// Column (0-indexed) holding the dominant strategy ID in a summary row.
const DOMINANT_STRATEGY_COLUMN: usize = 2;

/// Run summary files carry exactly this many columns.
const EXPECTED_COLUMNS: usize = 5;

/// What a single run file contributed after parsing.
enum Extraction {
    /// The final data row's dominant-strategy ID.
    Dominant(i64),
    /// The file parsed, but the strategy cell held a non-integer value.
    Unreadable,
    /// Wrong shape for a run summary; the file is excluded entirely.
    WrongShape(&'static str),
}

/// Scan a condition directory and tally the final outcome of every run file.
///
/// A run file is any directory entry whose name ends with `suffix`. Files
/// that cannot be read, fail to parse, do not have exactly five columns, or
/// contain no data rows are logged and excluded from the counts; only a
/// missing or unreadable directory is an error.
pub fn scan_condition(dir: &Path, suffix: &str, focal: Strategy) -> Result<ConditionCounts> {
    let mut counts = ConditionCounts::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }

        match extract_dominant_id(&path) {
            Ok(Extraction::Dominant(id)) => counts.record(Outcome::classify(id, focal)),
            Ok(Extraction::Unreadable) => {
                // The original comparison against known IDs simply fails for
                // a non-integer cell, so it lands in the "other" bucket.
                debug!(file = %path.display(), "non-integer dominant-strategy cell");
                counts.record(Outcome::Other);
            }
            Ok(Extraction::WrongShape(reason)) => {
                warn!(file = %path.display(), reason, "skipping malformed run file");
                counts.record_skip();
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "error reading run file, skipping");
                counts.record_skip();
            }
        }
    }

    debug!(
        dir = %dir.display(),
        scanned = counts.files_scanned,
        skipped = counts.files_skipped,
        "condition scan complete"
    );

    Ok(counts)
}

/// Read one run file and pull the dominant-strategy ID from its final row.
fn extract_dominant_id(path: &Path) -> std::result::Result<Extraction, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

    if reader.headers()?.len() != EXPECTED_COLUMNS {
        return Ok(Extraction::WrongShape("not exactly five columns"));
    }

    let mut last = None;
    for record in reader.records() {
        last = Some(record?);
    }
    let Some(record) = last else {
        return Ok(Extraction::WrongShape("no data rows"));
    };

    match record.get(DOMINANT_STRATEGY_COLUMN) {
        Some(cell) => match cell.trim().parse::<i64>() {
            Ok(id) => Ok(Extraction::Dominant(id)),
            Err(_) => Ok(Extraction::Unreadable),
        },
        None => Ok(Extraction::WrongShape("missing dominant-strategy column")),
    }
}
