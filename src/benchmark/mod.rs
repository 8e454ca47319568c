//! Benchmark harness for greedy and exhaustive interval selection.
//!
//! Runs parameter sweeps over generated datasets, times each algorithm,
//! writes per-trial rows as CSV, and aggregates approximation ratios and
//! mean runtimes.
//!
//! # Sweeps
//!
//! | Sweep | Sizes | Measures |
//! |-------|-------|----------|
//! | Greedy | `n = 2^p`, `p ∈ [n_pow_min, n_pow_max]` | time + count per criterion |
//! | Exhaustive | `exhaustive_sizes` | exhaustive time, optimum, greedy counts |
//!
//! Dataset generation is excluded from every timing. A single seeded
//! generator feeds the whole sweep, so a config reproduces its datasets.

mod analysis;
mod config;
mod harness;

pub use analysis::{ApproximationSummary, ExhaustiveRuntimeSummary, GreedyRuntimeSummary};
pub use config::BenchmarkConfig;
pub use harness::{
    run_exhaustive_benchmark, run_greedy_benchmark, write_exhaustive_csv, write_greedy_csv,
    ExhaustiveTrial, GreedyTrial, PerCriterion,
};
