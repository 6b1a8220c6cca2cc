//! Input validation for scheduling runs.
//!
//! Checks job data and policy parameters before any simulation starts.
//! Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Total burst that overflows the logical clock
//! - Non-positive Round Robin quantum
//!
//! All problems are collected, not just the first one.

use std::fmt;

use crate::models::{total_burst, Job, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job needs zero or negative CPU time.
    NonPositiveBurst,
    /// A job arrives before t=0.
    NegativeArrival,
    /// Summed burst times exceed the clock range.
    TimeOverflow,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the jobs of a scheduling run.
///
/// Checks:
/// 1. Every burst time is positive
/// 2. Every arrival time is non-negative
/// 3. The total burst fits in [`Ticks`]
///
/// Duplicate names are allowed. An empty slice is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, job) in jobs.iter().enumerate() {
        if job.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Job '{}' (#{}) has non-positive burst time {}",
                    job.name,
                    idx + 1,
                    job.burst_time
                ),
            ));
        }

        if job.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Job '{}' (#{}) has negative arrival time {}",
                    job.name,
                    idx + 1,
                    job.arrival_time
                ),
            ));
        }
    }

    if total_burst(jobs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Total burst time exceeds the simulation clock range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: Ticks) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        ));
    }
    Ok(())
}
