//! Interval scheduling (activity selection) for the U-Engine ecosystem.
//!
//! Given a set of time intervals, selects a maximum-size subset of mutually
//! non-overlapping intervals, two ways:
//!
//! - **Greedy**: sort by a dispatching rule (EFT, EST, SD), then one
//!   compatibility scan. EFT is provably optimal; EST and SD are heuristics
//!   kept to measure how far they fall short.
//! - **Exhaustive**: enumerate every subset as a bitmask with a cardinality
//!   bound. Exponential; ground truth for `n <= 26`.
//!
//! # Modules
//!
//! - **`models`**: `Interval`, `IntervalSet`, `Selection`
//! - **`compatibility`**: pairwise compatibility oracle and dense matrix
//! - **`dispatching`**: EFT/EST/SD rules, `RuleEngine`, `GreedyCriterion`
//! - **`scheduler`**: `GreedySelector`, `ExhaustiveSolver`,
//!   `greedy_select`, `exhaustive_solve`
//! - **`validation`**: well-formedness checks for interval producers
//! - **`dataset`**: uniform random dataset generator
//! - **`benchmark`**: sweep harness, CSV output, approximation summaries
//!
//! # Example
//!
//! ```
//! use u_interval::dispatching::GreedyCriterion;
//! use u_interval::models::IntervalSet;
//! use u_interval::scheduler::{exhaustive_solve, greedy_select};
//!
//! let intervals = IntervalSet::from_pairs(&[
//!     (1.0, 3.0), (2.0, 5.0), (4.0, 7.0), (1.0, 8.0), (5.0, 9.0), (8.0, 10.0),
//! ]);
//!
//! let eft = greedy_select(&intervals, GreedyCriterion::Eft, true);
//! let opt = exhaustive_solve(&intervals, false).unwrap();
//! assert_eq!(eft.count, opt.count);
//! assert!(eft.is_feasible());
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1

pub mod benchmark;
pub mod compatibility;
pub mod dataset;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, SelectionError};
