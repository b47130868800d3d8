use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The summary strategies tracked in run logs.
///
/// The discriminants are the genome identifiers the simulation writes into
/// its summary files: a strategy's start state and decision list packed into
/// a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Non-cooperative baseline, genome ID 0.
    AlwaysDefect,
    /// Reciprocal cooperation, genome ID 5.
    TitForTat,
    /// Follows the population majority, genome ID 69.
    MajorityResponse,
}

impl Strategy {
    /// Look up a strategy by its genome ID.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            0 => Some(Strategy::AlwaysDefect),
            5 => Some(Strategy::TitForTat),
            69 => Some(Strategy::MajorityResponse),
            _ => None,
        }
    }

    /// The genome ID recorded in run summary files.
    pub fn id(self) -> i64 {
        match self {
            Strategy::AlwaysDefect => 0,
            Strategy::TitForTat => 5,
            Strategy::MajorityResponse => 69,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::AlwaysDefect => "always-defect",
            Strategy::TitForTat => "tit-for-tat",
            Strategy::MajorityResponse => "majority-response",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ad" | "always-defect" => Ok(Strategy::AlwaysDefect),
            "tft" | "tit-for-tat" => Ok(Strategy::TitForTat),
            "mr" | "majority-response" => Ok(Strategy::MajorityResponse),
            other => match other.parse::<i64>().ok().and_then(Strategy::from_id) {
                Some(strategy) => Ok(strategy),
                None => Err(format!("unknown strategy: {s}")),
            },
        }
    }
}

/// How a single run's final summary row is classified relative to the
/// condition's focal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The focal strategy dominated the population when the run ended.
    FocalWin,
    /// The always-defect baseline dominated.
    AlwaysDefectWin,
    /// Any other strategy dominated, or the identifier was unreadable.
    Other,
}

impl Outcome {
    /// Classify a run's final dominant-strategy ID.
    pub fn classify(dominant_id: i64, focal: Strategy) -> Self {
        if dominant_id == focal.id() {
            Outcome::FocalWin
        } else if dominant_id == Strategy::AlwaysDefect.id() {
            Outcome::AlwaysDefectWin
        } else {
            Outcome::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_known() {
        assert_eq!(Strategy::from_id(0), Some(Strategy::AlwaysDefect));
        assert_eq!(Strategy::from_id(5), Some(Strategy::TitForTat));
        assert_eq!(Strategy::from_id(69), Some(Strategy::MajorityResponse));
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(Strategy::from_id(1), None);
        assert_eq!(Strategy::from_id(-5), None);
        assert_eq!(Strategy::from_id(70), None);
    }

    #[test]
    fn test_id_round_trip() {
        for strategy in [
            Strategy::AlwaysDefect,
            Strategy::TitForTat,
            Strategy::MajorityResponse,
        ] {
            assert_eq!(Strategy::from_id(strategy.id()), Some(strategy));
        }
    }

    #[test]
    fn test_from_str_names() {
        assert_eq!("tft".parse::<Strategy>().unwrap(), Strategy::TitForTat);
        assert_eq!(
            "Tit-For-Tat".parse::<Strategy>().unwrap(),
            Strategy::TitForTat
        );
        assert_eq!(
            "mr".parse::<Strategy>().unwrap(),
            Strategy::MajorityResponse
        );
        assert_eq!("ad".parse::<Strategy>().unwrap(), Strategy::AlwaysDefect);
    }

    #[test]
    fn test_from_str_numeric_id() {
        assert_eq!("5".parse::<Strategy>().unwrap(), Strategy::TitForTat);
        assert_eq!(
            "69".parse::<Strategy>().unwrap(),
            Strategy::MajorityResponse
        );
        assert!("7".parse::<Strategy>().is_err());
        assert!("nonsense".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Strategy::TitForTat.to_string(), "tit-for-tat");
        assert_eq!(Strategy::AlwaysDefect.to_string(), "always-defect");
    }

    #[test]
    fn test_classify_focal_win() {
        assert_eq!(
            Outcome::classify(5, Strategy::TitForTat),
            Outcome::FocalWin
        );
        assert_eq!(
            Outcome::classify(69, Strategy::MajorityResponse),
            Outcome::FocalWin
        );
    }

    #[test]
    fn test_classify_always_defect() {
        assert_eq!(
            Outcome::classify(0, Strategy::TitForTat),
            Outcome::AlwaysDefectWin
        );
    }

    #[test]
    fn test_classify_other() {
        // MR winning a TFT condition is "other", not a focal win.
        assert_eq!(Outcome::classify(69, Strategy::TitForTat), Outcome::Other);
        assert_eq!(Outcome::classify(42, Strategy::TitForTat), Outcome::Other);
    }

    #[test]
    fn test_classify_always_defect_focal() {
        // When always-defect itself is focal, ID 0 is a focal win.
        assert_eq!(
            Outcome::classify(0, Strategy::AlwaysDefect),
            Outcome::FocalWin
        );
    }
}
