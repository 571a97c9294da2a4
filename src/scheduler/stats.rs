//! Batch statistics.
//!
//! Reduces an annotated batch into summary metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Mean waiting | sum(waiting) / N |
//! | Mean turnaround | sum(turnaround) / N |
//! | Makespan | Latest completion time |
//! | Total execution | Sum of execution times |
//! | Max waiting | Longest single wait |
//! | Throughput | N / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::Process;

/// Summary statistics of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Number of processes in the batch.
    pub process_count: usize,
    /// Mean waiting time.
    pub mean_waiting: f64,
    /// Mean turnaround time.
    pub mean_turnaround: f64,
    /// Latest completion time (the final clock).
    pub makespan: i64,
    /// Sum of execution times.
    pub total_execution: i64,
    /// Longest waiting time of any single process.
    pub max_waiting: i64,
    /// Processes completed per tick. `None` when the makespan is zero.
    pub throughput: Option<f64>,
}

impl BatchStats {
    /// Computes statistics from an annotated batch.
    ///
    /// Reads only the stored timing fields, so calling it again on the
    /// same batch yields the same result.
    ///
    /// # Errors
    /// [`ScheduleError::EmptyBatch`] if `processes` is empty.
    pub fn calculate(processes: &[Process]) -> Result<Self> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyBatch);
        }

        // Wider than the clock: N turnarounds can exceed i64 even when their max fits
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_execution: i64 = 0;
        let mut max_waiting: i64 = 0;
        let mut makespan: i64 = 0;

        for p in processes {
            total_waiting += i128::from(p.waiting_time());
            total_turnaround += i128::from(p.turnaround_time());
            total_execution += p.execution_time;
            max_waiting = max_waiting.max(p.waiting_time());
            makespan = makespan.max(p.completion_time());
        }

        let n = processes.len() as f64;
        let throughput = if makespan > 0 {
            Some(n / makespan as f64)
        } else {
            None
        };

        Ok(Self {
            process_count: processes.len(),
            mean_waiting: total_waiting as f64 / n,
            mean_turnaround: total_turnaround as f64 / n,
            makespan,
            total_execution,
            max_waiting,
            throughput,
        })
    }

    /// Mean execution time (turnaround minus waiting).
    pub fn mean_execution(&self) -> f64 {
        self.mean_turnaround - self.mean_waiting
    }
}
