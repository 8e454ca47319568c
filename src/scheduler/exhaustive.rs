//! Exhaustive optimal selection.
//!
//! # Algorithm
//!
//! 1. Build the dense [`CompatibilityMatrix`] once.
//! 2. Walk every mask `1..2^n` in ascending order.
//! 3. Skip masks with `popcount <= best_size` (cardinality bound).
//! 4. Check the survivors pairwise, stopping at the first conflict.
//! 5. Keep the first feasible mask of each new best size.
//!
//! Among equally large optima the lowest mask wins; only the count is
//! guaranteed, not which witness is returned.
//!
//! # Complexity
//! O(n · 2^n) time, O(n²) space.

use tracing::{debug, warn};

use crate::compatibility::CompatibilityMatrix;
use crate::error::{Result, SelectionError};
use crate::models::{IntervalSet, Selection};

/// Largest interval set the exhaustive solver will enumerate.
pub const MAX_EXHAUSTIVE_SIZE: usize = 26;

/// Brute-force maximum-cardinality solver for small inputs.
///
/// # Example
///
/// ```
/// use u_interval::models::IntervalSet;
/// use u_interval::scheduler::ExhaustiveSolver;
///
/// let intervals = IntervalSet::from_pairs(&[(0.0, 3.0), (2.0, 4.0), (3.0, 6.0)]);
/// let best = ExhaustiveSolver::new().solve(&intervals, true).unwrap();
/// assert_eq!(best.count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSolver {
    max_size: usize,
}

/// Counters from one enumeration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SearchStats {
    pruned: u64,
    checked: u64,
}

impl ExhaustiveSolver {
    /// Creates a solver with the default ceiling ([`MAX_EXHAUSTIVE_SIZE`]).
    pub fn new() -> Self {
        Self {
            max_size: MAX_EXHAUSTIVE_SIZE,
        }
    }

    /// Lowers the size ceiling. Values above [`MAX_EXHAUSTIVE_SIZE`] are clamped.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size.min(MAX_EXHAUSTIVE_SIZE);
        self
    }

    /// The ceiling in force.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Finds a maximum set of pairwise-compatible intervals.
    ///
    /// The witness, when requested, lists intervals in original index order.
    ///
    /// # Errors
    /// [`SelectionError::SizeLimitExceeded`] if `intervals.len()` exceeds the
    /// ceiling. Checked before the matrix is built.
    pub fn solve(&self, intervals: &IntervalSet, want_selection: bool) -> Result<Selection> {
        let n = intervals.len();
        if n > self.max_size {
            warn!(n, limit = self.max_size, "exhaustive search refused");
            return Err(SelectionError::SizeLimitExceeded {
                n,
                limit: self.max_size,
            });
        }
        if n == 0 {
            return Ok(Selection::empty(want_selection));
        }

        let matrix = CompatibilityMatrix::build(intervals);
        let (best_mask, best_size, stats) = Self::search(&matrix);

        debug!(
            n,
            count = best_size,
            pruned = stats.pruned,
            checked = stats.checked,
            "exhaustive search finished"
        );

        if !want_selection {
            return Ok(Selection::count_only(best_size));
        }
        let selected = mask_indices(best_mask, n)
            .into_iter()
            .map(|i| intervals[i])
            .collect();
        Ok(Selection::with_intervals(selected))
    }

    fn search(matrix: &CompatibilityMatrix) -> (u64, usize, SearchStats) {
        let n = matrix.size();
        let mut best_mask = 0u64;
        let mut best_size = 0usize;
        let mut stats = SearchStats::default();
        let mut indices = Vec::with_capacity(n);

        for mask in 1u64..(1u64 << n) {
            let bits = mask.count_ones() as usize;
            if bits <= best_size {
                stats.pruned += 1;
                continue;
            }

            indices.clear();
            indices.extend((0..n).filter(|&i| (mask >> i) & 1 == 1));
            stats.checked += 1;

            if matrix.is_feasible(&indices) {
                best_mask = mask;
                best_size = bits;
            }
        }

        (best_mask, best_size, stats)
    }
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        Self::new()
    }
}

fn mask_indices(mask: u64, n: usize) -> Vec<usize> {
    (0..n).filter(|&i| (mask >> i) & 1 == 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interval;

    fn textbook() -> IntervalSet {
        IntervalSet::from_pairs(&[
            (1.0, 3.0),
            (2.0, 5.0),
            (4.0, 7.0),
            (1.0, 8.0),
            (5.0, 9.0),
            (8.0, 10.0),
        ])
    }

    #[test]
    fn test_textbook_optimum() {
        let sel = ExhaustiveSolver::new().solve(&textbook(), true).unwrap();
        assert_eq!(sel.count, 3);
        assert!(sel.is_feasible());
        assert_eq!(
            sel.selected.unwrap(),
            vec![
                Interval::new(1.0, 3.0),
                Interval::new(4.0, 7.0),
                Interval::new(8.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_witness_in_index_order() {
        let set = IntervalSet::from_pairs(&[(8.0, 9.0), (0.0, 1.0), (4.0, 5.0)]);
        let sel = ExhaustiveSolver::new().solve(&set, true).unwrap();
        assert_eq!(sel.count, 3);
        assert_eq!(sel.selected.unwrap()[0], Interval::new(8.0, 9.0));
    }

    #[test]
    fn test_lowest_mask_wins_ties() {
        // {0,2} (mask 0b101) and {1,2} (mask 0b110) are both optimal.
        let set = IntervalSet::from_pairs(&[(0.0, 2.0), (1.0, 3.0), (5.0, 6.0)]);
        let sel = ExhaustiveSolver::new().solve(&set, true).unwrap();
        assert_eq!(
            sel.selected.unwrap(),
            vec![Interval::new(0.0, 2.0), Interval::new(5.0, 6.0)]
        );
    }

    #[test]
    fn test_identical_intervals() {
        let set: IntervalSet = std::iter::repeat(Interval::new(0.0, 5.0)).take(10).collect();
        let sel = ExhaustiveSolver::new().solve(&set, true).unwrap();
        assert_eq!(sel.count, 1);
        assert_eq!(sel.selected.unwrap(), vec![Interval::new(0.0, 5.0)]);
    }

    #[test]
    fn test_disjoint_intervals() {
        let set: IntervalSet = (0..12)
            .map(|i| Interval::new(2.0 * i as f64, 2.0 * i as f64 + 1.0))
            .collect();
        let sel = ExhaustiveSolver::new().solve(&set, false).unwrap();
        assert_eq!(sel.count, 12);
        assert!(sel.selected.is_none());
    }

    #[test]
    fn test_empty_input() {
        let sel = ExhaustiveSolver::new().solve(&IntervalSet::new(), true).unwrap();
        assert_eq!(sel.count, 0);
        assert_eq!(sel.selected, Some(Vec::new()));
    }

    #[test]
    fn test_single_interval() {
        let set = IntervalSet::from_pairs(&[(3.0, 4.0)]);
        assert_eq!(ExhaustiveSolver::new().solve(&set, false).unwrap().count, 1);
    }

    #[test]
    fn test_size_limit() {
        let set: IntervalSet = (0..27)
            .map(|i| Interval::new(i as f64, i as f64 + 0.5))
            .collect();
        let err = ExhaustiveSolver::new().solve(&set, false).unwrap_err();
        assert!(matches!(
            err,
            SelectionError::SizeLimitExceeded { n: 27, limit: 26 }
        ));
    }

    #[test]
    fn test_lowered_limit() {
        let solver = ExhaustiveSolver::new().with_max_size(5);
        assert_eq!(solver.max_size(), 5);
        let set = IntervalSet::from_pairs(&[(0.0, 1.0); 6]);
        assert!(matches!(
            solver.solve(&set, false),
            Err(SelectionError::SizeLimitExceeded { n: 6, limit: 5 })
        ));
        assert_eq!(
            ExhaustiveSolver::new().with_max_size(100).max_size(),
            MAX_EXHAUSTIVE_SIZE
        );
    }

    #[test]
    fn test_search_prunes_by_cardinality() {
        let set: IntervalSet = (0..4)
            .map(|i| Interval::new(i as f64, i as f64 + 1.0))
            .collect();
        let matrix = CompatibilityMatrix::build(&set);
        let (mask, size, stats) = ExhaustiveSolver::search(&matrix);
        assert_eq!(mask, 0b1111);
        assert_eq!(size, 4);
        assert_eq!(stats.pruned + stats.checked, 15);
        assert!(stats.pruned > 0);
    }
}
