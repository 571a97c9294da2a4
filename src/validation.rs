//! Input validation for scheduling batches.
//!
//! Checks a batch before it is ordered or simulated. Detects:
//! - Negative execution times (the clock would run backwards)
//! - Negative arrival times
//! - Missing priorities when the Priority algorithm is selected
//! - Duplicate process names (advisory unless strict)
//! - Total execution time beyond the representable clock range
//!
//! All issues are collected; validation never stops at the first one.

use crate::models::Process;
use crate::policy::Algorithm;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
///
/// `Ok` carries advisory (non-fatal) issues; `Err` carries every issue
/// found, fatal and advisory alike.
pub type ValidationResult = Result<Vec<ValidationError>, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Name of the offending process.
    pub process: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process requires negative CPU time.
    NegativeExecutionTime,
    /// A process arrives before t=0.
    NegativeArrivalTime,
    /// Priority scheduling was requested but a process has no priority.
    MissingPriority,
    /// Two processes share the same name.
    DuplicateName,
    /// The summed execution times do not fit the clock.
    TimeOverflow,
}

impl ValidationErrorKind {
    /// Whether this kind rejects the batch on its own.
    pub fn is_fatal(self) -> bool {
        !matches!(self, ValidationErrorKind::DuplicateName)
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, process: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            process: process.to_string(),
            message: message.into(),
        }
    }

    /// Whether this error rejects the batch under default settings.
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a batch for the given algorithm.
///
/// Checks:
/// 1. Every execution time is non-negative
/// 2. Every arrival time, if present, is non-negative
/// 3. Every process has a priority when `algorithm` requires one
/// 4. No two processes share a name
/// 5. The total execution time fits in an `i64` clock
///
/// With `strict_names`, duplicate names are fatal.
///
/// # Returns
/// `Ok(advisories)` if no fatal issue was found, `Err(issues)` otherwise.
/// An empty batch is valid here; emptiness is rejected by aggregation.
pub fn validate_batch(
    processes: &[Process],
    algorithm: Algorithm,
    strict_names: bool,
) -> ValidationResult {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let mut clock: Option<i64> = Some(0);

    for p in processes {
        if p.execution_time < 0 {
            issues.push(ValidationError::new(
                ValidationErrorKind::NegativeExecutionTime,
                &p.name,
                format!(
                    "Process '{}' has negative execution time {}",
                    p.name, p.execution_time
                ),
            ));
        } else if let Some(total) = clock {
            clock = total.checked_add(p.execution_time);
            if clock.is_none() {
                issues.push(ValidationError::new(
                    ValidationErrorKind::TimeOverflow,
                    &p.name,
                    format!(
                        "Process '{}' pushes the total execution time past {}",
                        p.name,
                        i64::MAX
                    ),
                ));
            }
        }

        if let Some(arrival) = p.arrival_time {
            if arrival < 0 {
                issues.push(ValidationError::new(
                    ValidationErrorKind::NegativeArrivalTime,
                    &p.name,
                    format!("Process '{}' has negative arrival time {arrival}", p.name),
                ));
            }
        }

        if algorithm.requires_priority() && p.priority.is_none() {
            issues.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                &p.name,
                format!("Process '{}' has no priority for {algorithm}", p.name),
            ));
        }

        if !seen.insert(p.name.as_str()) {
            issues.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                &p.name,
                format!("Duplicate process name: {}", p.name),
            ));
        }
    }

    let fatal = issues
        .iter()
        .any(|e| e.is_fatal() || (strict_names && e.kind == ValidationErrorKind::DuplicateName));

    if fatal {
        Err(issues)
    } else {
        Ok(issues)
    }
}
