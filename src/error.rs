//! Errors returned by scheduling runs.

use std::fmt;

use crate::validation::ValidationError;

/// Result alias for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Why a scheduling run was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The batch failed validation. Carries every issue found.
    InvalidInput(Vec<ValidationError>),
    /// Statistics were requested for a batch with no processes.
    EmptyBatch,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidInput(errors) => {
                write!(f, "invalid input ({} issue", errors.len())?;
                if errors.len() != 1 {
                    f.write_str("s")?;
                }
                f.write_str(")")?;
                for (i, e) in errors.iter().enumerate() {
                    f.write_str(if i == 0 { ": " } else { "; " })?;
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            ScheduleError::EmptyBatch => f.write_str("cannot compute statistics of an empty batch"),
        }
    }
}

impl std::error::Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::policy::Algorithm;
    use crate::validation::validate_batch;

    #[test]
    fn test_display_empty_batch() {
        assert_eq!(
            ScheduleError::EmptyBatch.to_string(),
            "cannot compute statistics of an empty batch"
        );
    }

    #[test]
    fn test_display_invalid_input() {
        let batch = vec![Process::new("A", -1), Process::new("B", -2)];
        let errors = validate_batch(&batch, Algorithm::Fcfs, false).unwrap_err();
        let msg = ScheduleError::InvalidInput(errors).to_string();
        assert!(msg.starts_with("invalid input (2 issues): "));
        assert!(msg.contains("'A'"));
        assert!(msg.contains("; Process 'B'"));
    }
}
