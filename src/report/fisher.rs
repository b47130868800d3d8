use serde::{Deserialize, Serialize};
use statrs::distribution::{Discrete, Hypergeometric};

/// Relative slack when comparing point probabilities against the observed
/// table's, so tables that are equally probable up to rounding are included.
const PMF_SLACK: f64 = 1.0 + 1e-7;

/// A 2x2 contingency table of wins and losses for two conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    pub wins_a: u64,
    pub losses_a: u64,
    pub wins_b: u64,
    pub losses_b: u64,
}

impl ContingencyTable {
    pub fn new(wins_a: u64, losses_a: u64, wins_b: u64, losses_b: u64) -> Self {
        Self {
            wins_a,
            losses_a,
            wins_b,
            losses_b,
        }
    }

    /// Total runs across both conditions.
    pub fn total(&self) -> u64 {
        self.wins_a + self.losses_a + self.wins_b + self.losses_b
    }
}

/// Result of a two-sided Fisher's exact test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FisherExact {
    /// Sample odds ratio `(wins_a * losses_b) / (losses_a * wins_b)`;
    /// infinite when the denominator is zero.
    pub odds_ratio: f64,
    /// Two-sided p-value.
    pub p_value: f64,
}

/// Run a two-sided Fisher's exact test on a 2x2 table.
///
/// With the table's margins fixed, the count in the top-left cell follows a
/// hypergeometric distribution. The p-value sums the point probabilities of
/// every table that is no more probable than the observed one.
pub fn fisher_exact(table: &ContingencyTable) -> FisherExact {
    let odds_ratio = sample_odds_ratio(table);

    let n = table.total();
    if n == 0 {
        return FisherExact {
            odds_ratio,
            p_value: 1.0,
        };
    }

    let draws = table.wins_a + table.losses_a;
    let successes = table.wins_a + table.wins_b;
    let dist = match Hypergeometric::new(n, successes, draws) {
        Ok(dist) => dist,
        // Margins derived from the table always satisfy the distribution's
        // constraints, so this arm stays dead for any real input.
        Err(_) => {
            return FisherExact {
                odds_ratio,
                p_value: 1.0,
            }
        }
    };

    let k_min = draws.saturating_sub(n - successes);
    let k_max = draws.min(successes);
    let cutoff = dist.pmf(table.wins_a) * PMF_SLACK;

    let p_value: f64 = (k_min..=k_max)
        .map(|k| dist.pmf(k))
        .filter(|p| *p <= cutoff)
        .sum();

    FisherExact {
        odds_ratio,
        p_value: p_value.min(1.0),
    }
}

/// The unconditional sample odds ratio, matching the convention of treating
/// any zero in the denominator as infinite.
fn sample_odds_ratio(table: &ContingencyTable) -> f64 {
    if table.losses_a > 0 && table.wins_b > 0 {
        (table.wins_a as f64 * table.losses_b as f64)
            / (table.losses_a as f64 * table.wins_b as f64)
    } else {
        f64::INFINITY
    }
}
