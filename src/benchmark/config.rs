//! Benchmark sweep configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectionError};
use crate::scheduler::MAX_EXHAUSTIVE_SIZE;

/// Largest greedy exponent accepted (`n = 2^30`).
const MAX_N_POW: u32 = 30;

/// Parameters of a benchmark sweep.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use u_interval::benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::default()
///     .with_trials(3)
///     .with_alphas(vec![1.0])
///     .with_greedy_pow_range(4, 6)
///     .with_seed(9);
/// assert_eq!(config.greedy_sizes(), vec![16, 32, 64]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Trials per (alpha, n) cell.
    pub trials: usize,
    /// Maximum interval duration `D`.
    pub max_duration: u32,
    /// Horizon scale factors to sweep.
    pub alphas: Vec<f64>,
    /// Seed for the sweep's random generator.
    pub seed: u64,
    /// Smallest greedy exponent.
    pub n_pow_min: u32,
    /// Largest greedy exponent (inclusive).
    pub n_pow_max: u32,
    /// Interval counts for the exhaustive sweep.
    pub exhaustive_sizes: Vec<usize>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            trials: 10,
            max_duration: 10,
            alphas: vec![0.1, 1.0, 5.0],
            seed: 0,
            n_pow_min: 10,
            n_pow_max: 20,
            exhaustive_sizes: vec![5, 10, 15, 20],
        }
    }
}

impl BenchmarkConfig {
    /// Sets the number of trials per (alpha, n) cell.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the maximum interval duration `D`.
    pub fn with_max_duration(mut self, max_duration: u32) -> Self {
        self.max_duration = max_duration;
        self
    }

    /// Sets the horizon scale factors to sweep.
    pub fn with_alphas(mut self, alphas: Vec<f64>) -> Self {
        self.alphas = alphas;
        self
    }

    /// Sets the sweep seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the greedy exponent range `min..=max`.
    pub fn with_greedy_pow_range(mut self, min: u32, max: u32) -> Self {
        self.n_pow_min = min;
        self.n_pow_max = max;
        self
    }

    /// Sets the exhaustive sweep sizes.
    pub fn with_exhaustive_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.exhaustive_sizes = sizes;
        self
    }

    /// Greedy sweep sizes, `2^n_pow_min ..= 2^n_pow_max`.
    pub fn greedy_sizes(&self) -> Vec<usize> {
        (self.n_pow_min..=self.n_pow_max).map(|p| 1usize << p).collect()
    }

    /// Checks the sweep parameters.
    ///
    /// # Errors
    /// [`SelectionError::InvalidInput`] on the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(SelectionError::InvalidInput(msg)) };

        if self.trials == 0 {
            return invalid("trials must be positive".into());
        }
        if self.max_duration == 0 {
            return invalid("D must be positive".into());
        }
        if self.alphas.is_empty() {
            return invalid("at least one alpha is required".into());
        }
        if let Some(a) = self.alphas.iter().find(|a| !(a.is_finite() && **a > 0.0)) {
            return invalid(format!("alpha must be positive, got {a}"));
        }
        if self.n_pow_min > self.n_pow_max || self.n_pow_max > MAX_N_POW {
            return invalid(format!(
                "greedy exponent range {}..={} must be ordered and at most {MAX_N_POW}",
                self.n_pow_min, self.n_pow_max
            ));
        }
        if let Some(n) = self
            .exhaustive_sizes
            .iter()
            .find(|&&n| n == 0 || n > MAX_EXHAUSTIVE_SIZE)
        {
            return invalid(format!(
                "exhaustive size {n} outside 1..={MAX_EXHAUSTIVE_SIZE}"
            ));
        }
        Ok(())
    }
}
