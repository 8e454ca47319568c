//! Interval selection solvers.
//!
//! # Algorithms
//!
//! - [`GreedySelector`]: sort by a dispatching rule, then a single
//!   compatibility scan. O(n log n). Optimal under EFT only.
//! - [`ExhaustiveSolver`]: bitmask enumeration of every subset with a
//!   cardinality bound. O(n · 2^n). Ground truth for small n.
//!
//! Both are pure functions of their input: no shared state, no suspension
//! points, safe to call concurrently on independent interval sets.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1

mod exhaustive;
mod greedy;

pub use exhaustive::{ExhaustiveSolver, MAX_EXHAUSTIVE_SIZE};
pub use greedy::GreedySelector;

use crate::dispatching::GreedyCriterion;
use crate::error::Result;
use crate::models::{IntervalSet, Selection};

/// Greedy selection under one criterion.
///
/// Empty input yields `count = 0`; never fails.
pub fn greedy_select(
    intervals: &IntervalSet,
    criterion: GreedyCriterion,
    want_selection: bool,
) -> Selection {
    GreedySelector::new(criterion).select(intervals, want_selection)
}

/// Maximum-cardinality selection by exhaustive search.
///
/// # Errors
/// [`SelectionError::SizeLimitExceeded`](crate::error::SelectionError::SizeLimitExceeded)
/// when `intervals.len() > MAX_EXHAUSTIVE_SIZE`, before any enumeration.
pub fn exhaustive_solve(intervals: &IntervalSet, want_selection: bool) -> Result<Selection> {
    ExhaustiveSolver::new().solve(intervals, want_selection)
}
