//! Named greedy criteria.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{rules, RuleEngine};
use crate::error::SelectionError;

/// The three sort keys studied for greedy interval selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GreedyCriterion {
    /// Earliest finish time.
    Eft,
    /// Earliest start time.
    Est,
    /// Shortest duration.
    Sd,
}

impl GreedyCriterion {
    /// All criteria, in reporting order.
    pub const ALL: [GreedyCriterion; 3] = [Self::Eft, Self::Est, Self::Sd];

    /// Short name as used in tabular output ("EFT", "EST", "SD").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Eft => "EFT",
            Self::Est => "EST",
            Self::Sd => "SD",
        }
    }

    /// Whether greedy scanning under this criterion is provably optimal.
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Eft)
    }

    /// Rule engine sorting by this criterion alone (ties keep input order).
    pub fn engine(&self) -> RuleEngine {
        let engine = RuleEngine::new();
        match self {
            Self::Eft => engine.with_rule(rules::Eft),
            Self::Est => engine.with_rule(rules::Est),
            Self::Sd => engine.with_rule(rules::Sd),
        }
    }
}

impl fmt::Display for GreedyCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GreedyCriterion {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EFT" => Ok(Self::Eft),
            "EST" => Ok(Self::Est),
            "SD" => Ok(Self::Sd),
            other => Err(SelectionError::InvalidInput(format!(
                "unknown greedy criterion '{other}' (expected EFT, EST or SD)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("eft".parse::<GreedyCriterion>().unwrap(), GreedyCriterion::Eft);
        assert_eq!(" EST ".parse::<GreedyCriterion>().unwrap(), GreedyCriterion::Est);
        assert_eq!("Sd".parse::<GreedyCriterion>().unwrap(), GreedyCriterion::Sd);
        assert!(matches!(
            "LPT".parse::<GreedyCriterion>(),
            Err(SelectionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for c in GreedyCriterion::ALL {
            assert_eq!(c.to_string().parse::<GreedyCriterion>().unwrap(), c);
        }
    }

    #[test]
    fn test_engine_uses_matching_rule() {
        assert_eq!(GreedyCriterion::Sd.engine().rule_names(), vec!["SD"]);
        assert!(GreedyCriterion::Eft.is_exact());
        assert!(!GreedyCriterion::Est.is_exact());
    }

    #[test]
    fn test_serde_uppercase() {
        let json = serde_json::to_string(&GreedyCriterion::Eft).unwrap();
        assert_eq!(json, r#""EFT""#);
        let back: GreedyCriterion = serde_json::from_str(r#""SD""#).unwrap();
        assert_eq!(back, GreedyCriterion::Sd);
    }
}
