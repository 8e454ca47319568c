//! Input validation for interval sets.
//!
//! Checks the well-formedness that dataset producers are responsible for.
//! The solvers themselves do not call this: malformed intervals flow through
//! them unchanged. Detects:
//! - Non-finite endpoints (NaN, ±∞)
//! - Non-positive durations (`finish <= start`)

use crate::models::IntervalSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Index of the offending interval.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Start or finish is NaN or infinite.
    NonFiniteEndpoint,
    /// Finish does not exceed start (zero or negative duration).
    NonPositiveDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Validates every interval in the set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
/// A non-finite interval is reported once, as `NonFiniteEndpoint`.
pub fn validate_intervals(intervals: &IntervalSet) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, iv) in intervals.iter().enumerate() {
        if !iv.start.is_finite() || !iv.finish.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteEndpoint,
                index,
                format!("Interval {index} has a non-finite endpoint: ({}, {})", iv.start, iv.finish),
            ));
        } else if iv.finish <= iv.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                index,
                format!(
                    "Interval {index} finishes at or before it starts: ({}, {})",
                    iv.start, iv.finish
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
