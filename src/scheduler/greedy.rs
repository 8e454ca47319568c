//! Greedy activity selection.
//!
//! # Algorithm
//!
//! 1. Stable-sort intervals by the selector's rule engine.
//! 2. Scan left to right keeping `last_finish` (initially −∞).
//! 3. Accept `(s, f)` iff `s >= last_finish`, then set `last_finish = f`.
//!    A rejected interval is never reconsidered.
//!
//! Only the most recently accepted interval is checked. Every accepted
//! interval starts at or after the previous one's finish, so on well-formed
//! input (`start < finish`) the accepted intervals form a chain and are
//! pairwise compatible under any scan order, not just EFT.
//!
//! # Complexity
//! O(n log n) sort + O(n) scan.

use tracing::debug;

use crate::dispatching::{GreedyCriterion, RuleEngine};
use crate::models::{Interval, IntervalSet, Selection};

/// Sort-then-scan greedy selector.
///
/// # Example
///
/// ```
/// use u_interval::dispatching::GreedyCriterion;
/// use u_interval::models::IntervalSet;
/// use u_interval::scheduler::GreedySelector;
///
/// let intervals = IntervalSet::from_pairs(&[(0.0, 10.0), (1.0, 2.0), (3.0, 4.0)]);
///
/// let eft = GreedySelector::new(GreedyCriterion::Eft).select(&intervals, true);
/// assert_eq!(eft.count, 2);
///
/// let est = GreedySelector::new(GreedyCriterion::Est).select(&intervals, false);
/// assert_eq!(est.count, 1);
/// assert!(est.selected.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct GreedySelector {
    criterion: GreedyCriterion,
    engine: RuleEngine,
}

impl GreedySelector {
    /// Creates a selector ordering by `criterion`.
    pub fn new(criterion: GreedyCriterion) -> Self {
        Self {
            criterion,
            engine: criterion.engine(),
        }
    }

    /// Replaces the scan ordering (e.g. to add tie-breakers).
    ///
    /// `criterion` is kept as the reporting label.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.engine = engine;
        self
    }

    /// The criterion this selector reports under.
    pub fn criterion(&self) -> GreedyCriterion {
        self.criterion
    }

    /// Runs the greedy scan.
    pub fn select(&self, intervals: &IntervalSet, want_selection: bool) -> Selection {
        if intervals.is_empty() {
            return Selection::empty(want_selection);
        }

        let order = self.engine.sort_indices(intervals);
        let scan = order.iter().map(|&i| &intervals[i]);
        let selection = if want_selection {
            Selection::with_intervals(scan_compatible(scan).copied().collect())
        } else {
            Selection::count_only(scan_compatible(scan).count())
        };

        debug!(
            criterion = %self.criterion,
            n = intervals.len(),
            count = selection.count,
            "greedy selection finished"
        );
        selection
    }

    /// Runs every criterion on the same input, count only.
    pub fn select_all(intervals: &IntervalSet) -> [(GreedyCriterion, Selection); 3] {
        GreedyCriterion::ALL.map(|c| (c, Self::new(c).select(intervals, false)))
    }
}

/// Yields the intervals accepted by the compatibility scan, in scan order.
fn scan_compatible<'a, I>(sorted: I) -> impl Iterator<Item = &'a Interval>
where
    I: Iterator<Item = &'a Interval>,
{
    let mut last_finish = f64::NEG_INFINITY;
    sorted.filter(move |iv| {
        if iv.start >= last_finish {
            last_finish = iv.finish;
            true
        } else {
            false
        }
    })
}
