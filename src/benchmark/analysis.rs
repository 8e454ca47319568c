//! Sweep summaries.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Approximation ratio | mean over trials of `greedy_count / opt_count` |
//! | Exact matches | trials where `greedy_count == opt_count` |
//! | Mean runtime | mean wall-clock seconds per (alpha, n) cell |

use serde::{Deserialize, Serialize};

use super::{ExhaustiveTrial, GreedyTrial, PerCriterion};
use crate::dispatching::GreedyCriterion;

/// Greedy quality against the exhaustive optimum, for one alpha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproximationSummary {
    /// Horizon scale factor.
    pub alpha: f64,
    /// Distinct sizes covered, ascending.
    pub sizes: Vec<usize>,
    /// Number of trials aggregated.
    pub trials: usize,
    /// Mean approximation ratio per criterion.
    pub mean_ratio: PerCriterion<f64>,
    /// Trials where each criterion matched the optimum.
    pub exact_matches: PerCriterion<usize>,
}

impl ApproximationSummary {
    /// One summary per distinct alpha, ascending.
    pub fn from_trials(rows: &[ExhaustiveTrial]) -> Vec<Self> {
        distinct_sorted(rows.iter().map(|r| r.alpha))
            .into_iter()
            .map(|alpha| {
                let cell: Vec<&ExhaustiveTrial> =
                    rows.iter().filter(|r| r.alpha == alpha).collect();
                let trials = cell.len();
                let mean_ratio = PerCriterion::from_fn(|c| {
                    cell.iter().map(|r| r.ratio(c)).sum::<f64>() / trials as f64
                });
                let exact_matches = PerCriterion::from_fn(|c| {
                    cell.iter()
                        .filter(|r| r.greedy_counts.get(c) == r.opt_count)
                        .count()
                });
                let mut sizes: Vec<usize> = cell.iter().map(|r| r.n).collect();
                sizes.sort_unstable();
                sizes.dedup();

                Self {
                    alpha,
                    sizes,
                    trials,
                    mean_ratio,
                    exact_matches,
                }
            })
            .collect()
    }

    /// Whether EFT matched the optimum in every trial.
    pub fn eft_always_optimal(&self) -> bool {
        self.exact_matches.get(GreedyCriterion::Eft) == self.trials
    }
}

/// Mean greedy runtime for one (alpha, n) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreedyRuntimeSummary {
    /// Horizon scale factor.
    pub alpha: f64,
    /// Number of intervals.
    pub n: usize,
    /// Number of trials aggregated.
    pub trials: usize,
    /// Mean seconds per criterion.
    pub mean_secs: PerCriterion<f64>,
}

impl GreedyRuntimeSummary {
    /// One summary per (alpha, n), ascending by alpha then n.
    pub fn from_trials(rows: &[GreedyTrial]) -> Vec<Self> {
        let mut out = Vec::new();
        for alpha in distinct_sorted(rows.iter().map(|r| r.alpha)) {
            let by_alpha: Vec<&GreedyTrial> = rows.iter().filter(|r| r.alpha == alpha).collect();
            let mut sizes: Vec<usize> = by_alpha.iter().map(|r| r.n).collect();
            sizes.sort_unstable();
            sizes.dedup();

            for n in sizes {
                let cell: Vec<&&GreedyTrial> = by_alpha.iter().filter(|r| r.n == n).collect();
                let trials = cell.len();
                out.push(Self {
                    alpha,
                    n,
                    trials,
                    mean_secs: PerCriterion::from_fn(|c| {
                        cell.iter().map(|r| r.secs.get(c)).sum::<f64>() / trials as f64
                    }),
                });
            }
        }
        out
    }
}

/// Mean exhaustive runtime for one (alpha, n) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhaustiveRuntimeSummary {
    /// Horizon scale factor.
    pub alpha: f64,
    /// Number of intervals.
    pub n: usize,
    /// Number of trials aggregated.
    pub trials: usize,
    /// Mean seconds of the exhaustive solve.
    pub mean_secs: f64,
}

impl ExhaustiveRuntimeSummary {
    /// One summary per (alpha, n), ascending by alpha then n.
    pub fn from_trials(rows: &[ExhaustiveTrial]) -> Vec<Self> {
        let mut out = Vec::new();
        for alpha in distinct_sorted(rows.iter().map(|r| r.alpha)) {
            let mut sizes: Vec<usize> = rows
                .iter()
                .filter(|r| r.alpha == alpha)
                .map(|r| r.n)
                .collect();
            sizes.sort_unstable();
            sizes.dedup();

            for n in sizes {
                let secs: Vec<f64> = rows
                    .iter()
                    .filter(|r| r.alpha == alpha && r.n == n)
                    .map(|r| r.exhaustive_secs)
                    .collect();
                out.push(Self {
                    alpha,
                    n,
                    trials: secs.len(),
                    mean_secs: secs.iter().sum::<f64>() / secs.len() as f64,
                });
            }
        }
        out
    }
}

fn distinct_sorted(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(f64::total_cmp);
    v.dedup();
    v
}
