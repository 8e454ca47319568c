//! Interval (activity) model.
//!
//! An interval is the occupied time span `[start, finish)` of one activity.
//! Two intervals conflict only if their open interiors intersect, so an
//! interval finishing exactly when another starts does not conflict with it.
//!
//! # Well-formedness
//! Intervals are expected to satisfy `start < finish`. This is the producer's
//! responsibility (see [`crate::validation`]); the solvers do not check it.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A single activity's time span.
///
/// Immutable once created; all fields are plain `f64` so intervals are `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Start time.
    pub start: f64,
    /// Finish time.
    pub finish: f64,
}

impl Interval {
    /// Creates an interval from its endpoints.
    pub fn new(start: f64, finish: f64) -> Self {
        Self { start, finish }
    }

    /// Occupied length (`finish - start`).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.finish - self.start
    }

    /// Whether the two intervals can both be selected.
    ///
    /// True iff one finishes at or before the other starts. Symmetric.
    #[inline]
    pub fn is_compatible_with(&self, other: &Interval) -> bool {
        self.finish <= other.start || other.finish <= self.start
    }

    /// Whether the two intervals share time (negation of compatibility).
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        !self.is_compatible_with(other)
    }

    /// Whether the interval has finite endpoints and positive duration.
    pub fn is_well_formed(&self) -> bool {
        self.start.is_finite() && self.finish.is_finite() && self.finish > self.start
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, finish): (f64, f64)) -> Self {
        Self::new(start, finish)
    }
}

/// An ordered collection of intervals.
///
/// Index positions are only used internally (bitmask enumeration, stable
/// tie-breaking); the scheduling problem treats the set as unordered.
/// Solvers borrow the set immutably and never modify it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(start, finish)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        pairs.iter().copied().map(Interval::from).collect()
    }

    /// Adds an interval.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.intervals.push(interval);
        self
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the set has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the interval at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }

    /// Iterates intervals in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Borrows the underlying slice.
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Copies the first `k` intervals (or all, if fewer).
    ///
    /// Used for warm-up runs on a prefix of a generated dataset.
    pub fn truncated(&self, k: usize) -> IntervalSet {
        IntervalSet {
            intervals: self.intervals[..k.min(self.len())].to_vec(),
        }
    }

    /// Consumes the set, returning its intervals.
    pub fn into_vec(self) -> Vec<Interval> {
        self.intervals
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for IntervalSet {
    type Output = Interval;

    fn index(&self, index: usize) -> &Interval {
        &self.intervals[index]
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
