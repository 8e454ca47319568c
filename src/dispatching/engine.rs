//! Rule engine for greedy scan ordering.
//!
//! Composes a primary dispatching rule with optional tie-breaking rules and
//! produces a stable scan order over an interval set.
//!
//! # Tie Handling
//! Scores are compared exactly (`f64::total_cmp`, with `-0.0` read as `0.0`).
//! Intervals tied on every rule keep their input order, so repeated runs
//! over the same set always scan in the same order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::SelectionRule;
use crate::models::{Interval, IntervalSet};

/// A composable rule engine for interval scan ordering.
///
/// # Example
/// ```
/// use u_interval::dispatching::{rules, RuleEngine};
/// use u_interval::models::IntervalSet;
///
/// let intervals = IntervalSet::from_pairs(&[(0.0, 4.0), (1.0, 3.0), (0.0, 2.0)]);
/// let engine = RuleEngine::new()
///     .with_rule(rules::Est)
///     .with_tie_breaker(rules::Sd);
///
/// // EST ties between 0 and 2 broken by the shorter interval.
/// assert_eq!(engine.sort_indices(&intervals), vec![2, 0, 1]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (keeps input order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Sets the primary rule, or appends another rule to the chain.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, primary first.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts intervals into scan order.
    ///
    /// Returns indices into `intervals`. Stable: full ties keep input order.
    pub fn sort_indices(&self, intervals: &IntervalSet) -> Vec<usize> {
        if intervals.is_empty() {
            return Vec::new();
        }

        // Scores are computed once per (rule, interval), not per comparison.
        // Adding 0.0 folds -0.0 into 0.0 so `total_cmp` treats them as a tie.
        let scores: Vec<Vec<f64>> = self
            .rules
            .iter()
            .map(|rule| {
                intervals
                    .iter()
                    .map(|iv| rule.evaluate(iv) + 0.0)
                    .collect()
            })
            .collect();

        let mut indices: Vec<usize> = (0..intervals.len()).collect();
        indices.sort_by(|&a, &b| Self::compare_sequential(&scores, a, b));
        indices
    }

    /// Copies intervals out in scan order.
    pub fn sorted(&self, intervals: &IntervalSet) -> Vec<Interval> {
        self.sort_indices(intervals)
            .into_iter()
            .map(|i| intervals[i])
            .collect()
    }

    fn compare_sequential(scores: &[Vec<f64>], a: usize, b: usize) -> Ordering {
        for rule_scores in scores {
            match rule_scores[a].total_cmp(&rule_scores[b]) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn sample() -> IntervalSet {
        IntervalSet::from_pairs(&[(0.0, 10.0), (2.0, 3.0), (1.0, 5.0), (4.0, 6.0)])
    }

    #[test]
    fn test_eft_ordering() {
        let engine = RuleEngine::new().with_rule(rules::Eft);
        assert_eq!(engine.sort_indices(&sample()), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_est_ordering() {
        let engine = RuleEngine::new().with_rule(rules::Est);
        assert_eq!(engine.sort_indices(&sample()), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_sd_ordering() {
        let engine = RuleEngine::new().with_rule(rules::Sd);
        // durations: 10, 1, 4, 2
        assert_eq!(engine.sort_indices(&sample()), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let set = IntervalSet::from_pairs(&[(3.0, 5.0), (0.0, 5.0), (4.0, 5.0)]);
        let engine = RuleEngine::new().with_rule(rules::Eft);
        assert_eq!(engine.sort_indices(&set), vec![0, 1, 2]);
    }

    #[test]
    fn test_signed_zero_scores_tie() {
        let set = IntervalSet::from_pairs(&[(0.0, 1.0), (-0.0, 2.0), (1.0, 2.0)]);
        let engine = RuleEngine::new().with_rule(rules::Est);
        assert_eq!(engine.sort_indices(&set), vec![0, 1, 2]);
    }

    #[test]
    fn test_tie_breaker() {
        let set = IntervalSet::from_pairs(&[(3.0, 5.0), (0.0, 5.0), (4.0, 5.0)]);
        let engine = RuleEngine::new()
            .with_rule(rules::Eft)
            .with_tie_breaker(rules::Sd);
        assert_eq!(engine.sort_indices(&set), vec![2, 0, 1]);
    }

    #[test]
    fn test_empty() {
        let engine = RuleEngine::new().with_rule(rules::Eft);
        assert!(engine.sort_indices(&IntervalSet::new()).is_empty());
    }

    #[test]
    fn test_no_rules_keeps_input_order() {
        assert_eq!(RuleEngine::new().sort_indices(&sample()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sorted_copies() {
        let engine = RuleEngine::new().with_rule(rules::Eft);
        let sorted = engine.sorted(&sample());
        assert_eq!(sorted[0], Interval::new(2.0, 3.0));
        assert_eq!(sorted[3], Interval::new(0.0, 10.0));
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new()
            .with_rule(rules::Est)
            .with_tie_breaker(rules::Eft);
        assert_eq!(engine.rule_names(), vec!["EST", "EFT"]);
        assert!(format!("{engine:?}").contains("EST"));
    }
}
