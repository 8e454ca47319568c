//! Uniform random interval datasets.
//!
//! # Model
//!
//! For `n` intervals, maximum duration `D`, and density parameter `alpha`:
//!
//! - horizon `T = alpha · n · D`
//! - start `s_i ~ Uniform[0, T)`
//! - duration `d_i ~ UniformInt{1..=D}`
//! - finish `f_i = s_i + d_i`
//!
//! Small `alpha` packs intervals densely (heavy overlap, small optimum);
//! large `alpha` spreads them out (optimum close to `n`).
//!
//! The random source is passed in by the caller, so a seeded generator
//! reproduces the same dataset.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectionError};
use crate::models::{Interval, IntervalSet};

/// Parameters of the uniform dataset model.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_interval::dataset::UniformDatasetConfig;
///
/// let config = UniformDatasetConfig::default()
///     .with_n(100)
///     .with_max_duration(10)
///     .with_alpha(1.0);
/// let mut rng = StdRng::seed_from_u64(7);
/// let (intervals, meta) = config.generate(&mut rng).unwrap();
/// assert_eq!(intervals.len(), 100);
/// assert!((meta.horizon - 1000.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformDatasetConfig {
    /// Number of intervals.
    pub n: usize,
    /// Maximum (integer) duration `D`.
    pub max_duration: u32,
    /// Horizon scale factor.
    pub alpha: f64,
}

impl Default for UniformDatasetConfig {
    fn default() -> Self {
        Self {
            n: 1024,
            max_duration: 10,
            alpha: 1.0,
        }
    }
}

/// Metadata describing a generated dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    /// Number of intervals.
    pub n: usize,
    /// Maximum duration `D`.
    pub max_duration: u32,
    /// Horizon scale factor.
    pub alpha: f64,
    /// Horizon `T = alpha · n · D`.
    pub horizon: f64,
}

impl UniformDatasetConfig {
    /// Creates a config.
    pub fn new(n: usize, max_duration: u32, alpha: f64) -> Self {
        Self {
            n,
            max_duration,
            alpha,
        }
    }

    /// Sets the number of intervals.
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Sets the maximum duration `D`.
    pub fn with_max_duration(mut self, max_duration: u32) -> Self {
        self.max_duration = max_duration;
        self
    }

    /// Sets the horizon scale factor.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Horizon `T = alpha · n · D`.
    pub fn horizon(&self) -> f64 {
        self.alpha * self.n as f64 * f64::from(self.max_duration)
    }

    /// Checks that every parameter is positive and the horizon is finite.
    ///
    /// # Errors
    /// [`SelectionError::InvalidInput`] naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(SelectionError::InvalidInput("n must be positive".into()));
        }
        if self.max_duration == 0 {
            return Err(SelectionError::InvalidInput("D must be positive".into()));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(SelectionError::InvalidInput(format!(
                "alpha must be positive, got {}",
                self.alpha
            )));
        }
        let horizon = self.horizon();
        if !(horizon.is_finite() && horizon > 0.0) {
            return Err(SelectionError::InvalidInput(format!(
                "horizon alpha * n * D must be finite and positive, got {horizon}"
            )));
        }
        Ok(())
    }

    /// Draws a dataset from `rng`.
    ///
    /// Every generated interval is well-formed (`finish - start >= 1`).
    ///
    /// # Errors
    /// [`SelectionError::InvalidInput`] for non-positive parameters or a
    /// horizon that overflows.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<(IntervalSet, DatasetMeta)> {
        self.validate()?;

        let horizon = self.horizon();
        let intervals: IntervalSet = (0..self.n)
            .map(|_| {
                let start = rng.random_range(0.0..horizon);
                let duration = rng.random_range(1..=self.max_duration);
                Interval::new(start, start + f64::from(duration))
            })
            .collect();

        let meta = DatasetMeta {
            n: self.n,
            max_duration: self.max_duration,
            alpha: self.alpha,
            horizon,
        };
        Ok((intervals, meta))
    }
}
