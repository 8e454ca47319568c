//! Dispatching rules and rule engine for greedy interval selection.
//!
//! A greedy selector scans intervals in a priority order and accepts each one
//! that fits after the last accepted interval. The order comes from a
//! dispatching rule (EFT, EST, SD) evaluated per interval.
//!
//! # Usage
//!
//! ```
//! use u_interval::dispatching::{rules, GreedyCriterion, RuleEngine};
//! use u_interval::models::IntervalSet;
//!
//! let intervals = IntervalSet::from_pairs(&[(0.0, 9.0), (1.0, 2.0), (3.0, 4.0)]);
//!
//! let engine = RuleEngine::new().with_rule(rules::Eft);
//! assert_eq!(engine.sort_indices(&intervals), vec![1, 2, 0]);
//!
//! // Same order through the criterion shorthand.
//! assert_eq!(GreedyCriterion::Eft.engine().sort_indices(&intervals), vec![1, 2, 0]);
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1

mod criterion;
mod engine;
pub mod rules;

pub use criterion::GreedyCriterion;
pub use engine::RuleEngine;

use crate::models::Interval;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = scanned earlier.
pub type RuleScore = f64;

/// A dispatching rule that assigns each interval its scan priority.
///
/// # Score Convention
/// **Lower score = earlier in the scan.** EFT returns the finish time,
/// so the earliest-finishing interval is considered first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "EFT", "SD").
    fn name(&self) -> &'static str;

    /// Evaluates the scan priority of an interval.
    fn evaluate(&self, interval: &Interval) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
