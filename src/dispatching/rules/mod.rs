//! Built-in dispatching rules.
//!
//! | Rule | Score | Optimal for max-cardinality selection? |
//! |------|-------|-----------------------------------------|
//! | EFT | finish | yes (exchange argument) |
//! | EST | start | no |
//! | SD | finish - start | no |
//!
//! # Score Convention
//! All rules return lower scores for intervals that should be scanned first.
//!
//! # References
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Thm. 16.1

use super::{RuleScore, SelectionRule};
use crate::models::Interval;

/// Earliest Finish Time.
///
/// Scans intervals by increasing finish time. The only one of the three
/// rules that always yields a maximum-cardinality selection: the earliest
/// finishing interval can be swapped into any optimal solution.
///
/// # Reference
/// Gavril (1972); Cormen et al. (2009), Thm. 16.1
#[derive(Debug, Clone, Copy)]
pub struct Eft;

impl SelectionRule for Eft {
    fn name(&self) -> &'static str {
        "EFT"
    }

    fn evaluate(&self, interval: &Interval) -> RuleScore {
        interval.finish
    }

    fn description(&self) -> &'static str {
        "Earliest Finish Time"
    }
}

/// Earliest Start Time.
///
/// Scans intervals by increasing start time. A single long interval that
/// starts first can block many short ones, so the ratio to the optimum is
/// unbounded below.
#[derive(Debug, Clone, Copy)]
pub struct Est;

impl SelectionRule for Est {
    fn name(&self) -> &'static str {
        "EST"
    }

    fn evaluate(&self, interval: &Interval) -> RuleScore {
        interval.start
    }

    fn description(&self) -> &'static str {
        "Earliest Start Time"
    }
}

/// Shortest Duration.
///
/// Scans intervals by increasing length. Paired with the last-finish scan,
/// a short interval lying earlier in time than the last accepted one is
/// skipped, so results can fall well below the optimum.
#[derive(Debug, Clone, Copy)]
pub struct Sd;

impl SelectionRule for Sd {
    fn name(&self) -> &'static str {
        "SD"
    }

    fn evaluate(&self, interval: &Interval) -> RuleScore {
        interval.duration()
    }

    fn description(&self) -> &'static str {
        "Shortest Duration"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eft_scores_finish() {
        let early = Interval::new(5.0, 6.0);
        let late = Interval::new(0.0, 9.0);
        assert!(Eft.evaluate(&early) < Eft.evaluate(&late));
    }

    #[test]
    fn test_est_scores_start() {
        let early = Interval::new(0.0, 9.0);
        let late = Interval::new(5.0, 6.0);
        assert!(Est.evaluate(&early) < Est.evaluate(&late));
    }

    #[test]
    fn test_sd_scores_duration() {
        let short = Interval::new(5.0, 6.0);
        let long = Interval::new(0.0, 9.0);
        assert!((Sd.evaluate(&short) - 1.0).abs() < 1e-12);
        assert!(Sd.evaluate(&short) < Sd.evaluate(&long));
    }

    #[test]
    fn test_names() {
        assert_eq!(Eft.name(), "EFT");
        assert_eq!(Est.description(), "Earliest Start Time");
        assert_eq!(Sd.description(), "Shortest Duration");
    }
}
