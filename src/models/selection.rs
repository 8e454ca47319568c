//! Selection (solution) model.
//!
//! A selection is the outcome of one solver invocation: how many intervals
//! were chosen and, when requested, which ones.

use serde::{Deserialize, Serialize};

use super::Interval;

/// Result of a single solver call.
///
/// `selected`, when present, always holds exactly `count` pairwise-compatible
/// intervals. Callers that only need the cardinality pass
/// `want_selection = false` and get `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Number of intervals chosen.
    pub count: usize,
    /// Chosen intervals in selection order.
    pub selected: Option<Vec<Interval>>,
}

impl Selection {
    /// A selection with nothing chosen.
    pub fn empty(want_selection: bool) -> Self {
        Self {
            count: 0,
            selected: want_selection.then(Vec::new),
        }
    }

    /// A count-only selection.
    pub fn count_only(count: usize) -> Self {
        Self {
            count,
            selected: None,
        }
    }

    /// A selection carrying its witness intervals.
    pub fn with_intervals(selected: Vec<Interval>) -> Self {
        Self {
            count: selected.len(),
            selected: Some(selected),
        }
    }

    /// Whether every pair of selected intervals is compatible.
    ///
    /// Count-only selections are vacuously feasible.
    pub fn is_feasible(&self) -> bool {
        let Some(selected) = &self.selected else {
            return true;
        };
        selected.iter().enumerate().all(|(i, a)| {
            selected[i + 1..]
                .iter()
                .all(|b| a.is_compatible_with(b))
        })
    }

    /// `count / optimum`, or 1.0 when the optimum is zero.
    pub fn approximation_ratio(&self, optimum: usize) -> f64 {
        if optimum == 0 {
            1.0
        } else {
            self.count as f64 / optimum as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(Selection::empty(true).selected, Some(Vec::new()));
        assert_eq!(Selection::empty(false).selected, None);
        assert_eq!(Selection::empty(true).count, 0);
    }

    #[test]
    fn test_with_intervals_sets_count() {
        let sel = Selection::with_intervals(vec![
            Interval::new(0.0, 1.0),
            Interval::new(1.0, 2.0),
        ]);
        assert_eq!(sel.count, 2);
        assert!(sel.is_feasible());
    }

    #[test]
    fn test_infeasible_detected() {
        let sel = Selection::with_intervals(vec![
            Interval::new(0.0, 5.0),
            Interval::new(6.0, 7.0),
            Interval::new(4.0, 6.0),
        ]);
        assert!(!sel.is_feasible());
    }

    #[test]
    fn test_approximation_ratio() {
        assert!((Selection::count_only(3).approximation_ratio(4) - 0.75).abs() < 1e-12);
        assert!((Selection::count_only(0).approximation_ratio(0) - 1.0).abs() < 1e-12);
    }
}
