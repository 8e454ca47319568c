//! Sweep runners and CSV output.

use std::io::Write;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::BenchmarkConfig;
use crate::dataset::UniformDatasetConfig;
use crate::dispatching::GreedyCriterion;
use crate::error::Result;
use crate::models::IntervalSet;
use crate::scheduler::{ExhaustiveSolver, GreedySelector};
use crate::validation::validate_intervals;

/// Prefix length for greedy warm-up runs.
const GREEDY_WARMUP_LEN: usize = 2000;
/// Prefix length for exhaustive warm-up runs.
const EXHAUSTIVE_WARMUP_LEN: usize = 10;

/// One value per greedy criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerCriterion<T> {
    /// Earliest finish time.
    pub eft: T,
    /// Earliest start time.
    pub est: T,
    /// Shortest duration.
    pub sd: T,
}

impl<T: Copy> PerCriterion<T> {
    /// Evaluates `f` once per criterion.
    pub fn from_fn(mut f: impl FnMut(GreedyCriterion) -> T) -> Self {
        Self {
            eft: f(GreedyCriterion::Eft),
            est: f(GreedyCriterion::Est),
            sd: f(GreedyCriterion::Sd),
        }
    }

    /// Value for `criterion`.
    pub fn get(&self, criterion: GreedyCriterion) -> T {
        match criterion {
            GreedyCriterion::Eft => self.eft,
            GreedyCriterion::Est => self.est,
            GreedyCriterion::Sd => self.sd,
        }
    }
}

/// One row of the greedy sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreedyTrial {
    /// Horizon scale factor.
    pub alpha: f64,
    /// Maximum interval duration `D`.
    pub max_duration: u32,
    /// Number of intervals.
    pub n: usize,
    /// 1-based trial number within the (alpha, n) cell.
    pub trial: usize,
    /// Wall-clock seconds per criterion.
    pub secs: PerCriterion<f64>,
    /// Selected interval count per criterion.
    pub counts: PerCriterion<usize>,
}

/// One row of the exhaustive sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhaustiveTrial {
    /// Horizon scale factor.
    pub alpha: f64,
    /// Maximum interval duration `D`.
    pub max_duration: u32,
    /// Number of intervals.
    pub n: usize,
    /// 1-based trial number within the (alpha, n) cell.
    pub trial: usize,
    /// Wall-clock seconds of the exhaustive solve.
    pub exhaustive_secs: f64,
    /// Optimum selection size.
    pub opt_count: usize,
    /// Greedy selection size per criterion.
    pub greedy_counts: PerCriterion<usize>,
}

impl ExhaustiveTrial {
    /// `greedy / optimum` for one criterion.
    pub fn ratio(&self, criterion: GreedyCriterion) -> f64 {
        if self.opt_count == 0 {
            1.0
        } else {
            self.greedy_counts.get(criterion) as f64 / self.opt_count as f64
        }
    }
}

fn time_secs<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64())
}

fn greedy_counts(intervals: &IntervalSet) -> PerCriterion<usize> {
    let [eft, est, sd] = GreedySelector::select_all(intervals).map(|(_, s)| s.count);
    PerCriterion { eft, est, sd }
}

/// Runs the greedy sweep.
///
/// For each alpha and each `n = 2^p`, generates `trials` datasets and times
/// every criterion on each (count only, no witness).
///
/// # Errors
/// [`SelectionError::InvalidInput`](crate::error::SelectionError::InvalidInput)
/// for an invalid config.
pub fn run_greedy_benchmark(config: &BenchmarkConfig) -> Result<Vec<GreedyTrial>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let sizes = config.greedy_sizes();
    let mut rows = Vec::with_capacity(config.alphas.len() * sizes.len() * config.trials);

    for &alpha in &config.alphas {
        for &n in &sizes {
            info!(alpha, n, trials = config.trials, "greedy sweep cell");
            let dataset = UniformDatasetConfig::new(n, config.max_duration, alpha);

            for trial in 1..=config.trials {
                let (intervals, _) = dataset.generate(&mut rng)?;
                debug_assert!(validate_intervals(&intervals).is_ok());

                // Warm-up on a prefix, excluded from timing.
                greedy_counts(&intervals.truncated(GREEDY_WARMUP_LEN));

                let secs = PerCriterion::from_fn(|c| {
                    let selector = GreedySelector::new(c);
                    time_secs(|| selector.select(&intervals, false)).1
                });
                let counts = greedy_counts(&intervals);

                debug!(
                    alpha,
                    n,
                    trial,
                    t_eft = secs.eft,
                    t_est = secs.est,
                    t_sd = secs.sd,
                    "greedy trial done"
                );
                rows.push(GreedyTrial {
                    alpha,
                    max_duration: config.max_duration,
                    n,
                    trial,
                    secs,
                    counts,
                });
            }
        }
    }

    info!(rows = rows.len(), "greedy sweep finished");
    Ok(rows)
}

/// Runs the exhaustive sweep.
///
/// For each alpha and each size in `exhaustive_sizes`, times the exhaustive
/// solver and records the optimum next to the three greedy counts.
///
/// # Errors
/// [`SelectionError::InvalidInput`](crate::error::SelectionError::InvalidInput)
/// for an invalid config.
pub fn run_exhaustive_benchmark(config: &BenchmarkConfig) -> Result<Vec<ExhaustiveTrial>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let solver = ExhaustiveSolver::new();
    let mut rows =
        Vec::with_capacity(config.alphas.len() * config.exhaustive_sizes.len() * config.trials);

    for &alpha in &config.alphas {
        for &n in &config.exhaustive_sizes {
            info!(alpha, n, trials = config.trials, "exhaustive sweep cell");
            let dataset = UniformDatasetConfig::new(n, config.max_duration, alpha);

            for trial in 1..=config.trials {
                let (intervals, _) = dataset.generate(&mut rng)?;
                debug_assert!(validate_intervals(&intervals).is_ok());

                solver.solve(&intervals.truncated(EXHAUSTIVE_WARMUP_LEN), false)?;

                let (optimum, exhaustive_secs) = time_secs(|| solver.solve(&intervals, false));
                let opt_count = optimum?.count;
                let greedy = greedy_counts(&intervals);

                debug!(alpha, n, trial, exhaustive_secs, opt_count, "exhaustive trial done");
                rows.push(ExhaustiveTrial {
                    alpha,
                    max_duration: config.max_duration,
                    n,
                    trial,
                    exhaustive_secs,
                    opt_count,
                    greedy_counts: greedy,
                });
            }
        }
    }

    info!(rows = rows.len(), "exhaustive sweep finished");
    Ok(rows)
}

/// Writes greedy rows as CSV with a header line.
///
/// Columns: `alpha,D,n,trial,t_EFT,t_EST,t_SD,count_EFT,count_EST,count_SD`.
pub fn write_greedy_csv<W: Write>(mut out: W, rows: &[GreedyTrial]) -> Result<()> {
    writeln!(out, "alpha,D,n,trial,t_EFT,t_EST,t_SD,count_EFT,count_EST,count_SD")?;
    for r in rows {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{}",
            r.alpha,
            r.max_duration,
            r.n,
            r.trial,
            r.secs.eft,
            r.secs.est,
            r.secs.sd,
            r.counts.eft,
            r.counts.est,
            r.counts.sd
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Writes exhaustive rows as CSV with a header line.
///
/// Columns: `alpha,D,n,trial,t_exhaustive,opt_count,greedy_EFT_count,greedy_EST_count,greedy_SD_count`.
pub fn write_exhaustive_csv<W: Write>(mut out: W, rows: &[ExhaustiveTrial]) -> Result<()> {
    writeln!(
        out,
        "alpha,D,n,trial,t_exhaustive,opt_count,greedy_EFT_count,greedy_EST_count,greedy_SD_count"
    )?;
    for r in rows {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            r.alpha,
            r.max_duration,
            r.n,
            r.trial,
            r.exhaustive_secs,
            r.opt_count,
            r.greedy_counts.eft,
            r.greedy_counts.est,
            r.greedy_counts.sd
        )?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectionError;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn small_config() -> BenchmarkConfig {
        BenchmarkConfig::default()
            .with_trials(2)
            .with_alphas(vec![0.1, 5.0])
            .with_greedy_pow_range(3, 5)
            .with_exhaustive_sizes(vec![4, 8])
            .with_seed(3)
    }

    #[test]
    fn test_greedy_sweep_rows() {
        init_tracing();
        let rows = run_greedy_benchmark(&small_config()).unwrap();
        assert_eq!(rows.len(), 2 * 3 * 2);
        assert_eq!(rows[0].n, 8);
        assert_eq!(rows[0].trial, 1);
        assert_eq!(rows[1].trial, 2);
        for r in &rows {
            // EFT is optimal, so never beaten by the heuristics.
            assert!(r.counts.eft >= r.counts.est);
            assert!(r.counts.eft >= r.counts.sd);
            assert!(r.counts.eft >= 1 && r.counts.eft <= r.n);
            assert!(r.secs.eft >= 0.0);
        }
    }

    #[test]
    fn test_exhaustive_sweep_eft_matches_optimum() {
        init_tracing();
        let rows = run_exhaustive_benchmark(&small_config()).unwrap();
        assert_eq!(rows.len(), 2 * 2 * 2);
        for r in &rows {
            assert_eq!(r.greedy_counts.eft, r.opt_count);
            assert!(r.opt_count >= r.greedy_counts.est);
            assert!(r.opt_count >= r.greedy_counts.sd);
            assert!((r.ratio(GreedyCriterion::Eft) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sweeps_are_reproducible() {
        let a = run_exhaustive_benchmark(&small_config()).unwrap();
        let b = run_exhaustive_benchmark(&small_config()).unwrap();
        let counts = |rows: &[ExhaustiveTrial]| {
            rows.iter()
                .map(|r| (r.opt_count, r.greedy_counts))
                .collect::<Vec<_>>()
        };
        assert_eq!(counts(&a), counts(&b));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = small_config().with_trials(0);
        assert!(matches!(
            run_greedy_benchmark(&config),
            Err(SelectionError::InvalidInput(_))
        ));
        assert!(matches!(
            run_exhaustive_benchmark(&config),
            Err(SelectionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_greedy_csv() {
        let rows = vec![GreedyTrial {
            alpha: 0.5,
            max_duration: 10,
            n: 1024,
            trial: 1,
            secs: PerCriterion {
                eft: 0.25,
                est: 0.5,
                sd: 0.75,
            },
            counts: PerCriterion {
                eft: 40,
                est: 30,
                sd: 35,
            },
        }];
        let mut buf = Vec::new();
        write_greedy_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "alpha,D,n,trial,t_EFT,t_EST,t_SD,count_EFT,count_EST,count_SD"
        );
        assert_eq!(lines[1], "0.5,10,1024,1,0.25,0.5,0.75,40,30,35");
    }

    #[test]
    fn test_exhaustive_csv() {
        let rows = vec![ExhaustiveTrial {
            alpha: 5.0,
            max_duration: 10,
            n: 15,
            trial: 3,
            exhaustive_secs: 0.125,
            opt_count: 12,
            greedy_counts: PerCriterion {
                eft: 12,
                est: 11,
                sd: 10,
            },
        }];
        let mut buf = Vec::new();
        write_exhaustive_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("alpha,D,n,trial,t_exhaustive,opt_count,"));
        assert_eq!(text.lines().nth(1), Some("5,10,15,3,0.125,12,12,11,10"));
    }

    #[test]
    fn test_per_criterion_get() {
        let values = PerCriterion::from_fn(|c| c.name().len());
        assert_eq!(values.get(GreedyCriterion::Eft), 3);
        assert_eq!(values.get(GreedyCriterion::Sd), 2);
    }
}
