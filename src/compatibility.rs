//! Compatibility oracle.
//!
//! Decides whether two intervals may both appear in a feasible selection.
//! The relation is symmetric and, by convention, reflexive: an interval is
//! compatible with itself so that subset checks can scan `i..` inclusively.
//!
//! Greedy scanning only ever needs the O(1) pairwise test
//! ([`Interval::is_compatible_with`]); the exhaustive solver materializes the
//! dense [`CompatibilityMatrix`] once per call.

use crate::models::{Interval, IntervalSet};

/// Dense n×n compatibility relation over an interval set.
///
/// Row-major `Vec<bool>`; O(n²) space. Intended for small n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl CompatibilityMatrix {
    /// Builds the matrix for `intervals`.
    pub fn build(intervals: &IntervalSet) -> Self {
        let n = intervals.len();
        let mut cells = vec![false; n * n];
        for (i, a) in intervals.iter().enumerate() {
            cells[i * n + i] = true;
            for (j, b) in intervals.iter().enumerate().skip(i + 1) {
                let ok = a.is_compatible_with(b);
                cells[i * n + j] = ok;
                cells[j * n + i] = ok;
            }
        }
        Self { n, cells }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Whether intervals `i` and `j` are compatible.
    #[inline]
    pub fn is_compatible(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.n + j]
    }

    /// Whether every pair among `indices` is compatible.
    ///
    /// Short-circuits on the first conflicting pair.
    pub fn is_feasible(&self, indices: &[usize]) -> bool {
        indices.iter().enumerate().all(|(a, &i)| {
            indices[a + 1..]
                .iter()
                .all(|&j| self.is_compatible(i, j))
        })
    }
}

/// Pairwise compatibility of two intervals (lazy form of the oracle).
#[inline]
pub fn is_compatible(a: &Interval, b: &Interval) -> bool {
    a.is_compatible_with(b)
}
