//! Scheduling driver: validate, order, simulate, aggregate.
//!
//! # Algorithm
//!
//! 1. Validate the batch for the selected algorithm. Reject before any mutation.
//! 2. Reorder the batch in place with the algorithm's ordering policy.
//! 3. Walk the timeline, annotating every process.
//! 4. Aggregate batch statistics.
//!
//! A run is atomic over its batch: either every process is annotated
//! and statistics are returned, or the batch is left untouched and an
//! error is returned.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{simulate, BatchStats};
use crate::error::{Result, ScheduleError};
use crate::models::{Process, Timeline};
use crate::policy::Algorithm;
use crate::validation::{validate_batch, ValidationError};

/// Run settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Treat duplicate process names as fatal.
    pub strict_names: bool,
    /// Validate the batch before scheduling.
    pub validate: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            strict_names: false,
            validate: true,
        }
    }
}

impl SchedulerConfig {
    /// Sets strict name checking.
    pub fn with_strict_names(mut self, strict: bool) -> Self {
        self.strict_names = strict;
        self
    }

    /// Enables or disables validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

/// Input container for a scheduling run.
///
/// Deserializable, so a driver can load a batch from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Algorithm to apply.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Processes to schedule, in arrival order.
    pub processes: Vec<Process>,
    /// Run settings.
    #[serde(default)]
    pub config: SchedulerConfig,
}

impl ScheduleRequest {
    /// Creates a request with default settings.
    pub fn new(algorithm: Algorithm, processes: Vec<Process>) -> Self {
        Self {
            algorithm,
            processes,
            config: SchedulerConfig::default(),
        }
    }

    /// Sets the run settings.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleOutcome {
    /// Algorithm that produced this outcome.
    pub algorithm: Algorithm,
    /// Service intervals in service order.
    pub timeline: Timeline,
    /// Batch statistics.
    pub stats: BatchStats,
    /// Advisory validation issues (e.g. duplicate names).
    #[serde(skip)]
    pub warnings: Vec<ValidationError>,
}

/// Non-preemptive single-CPU scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::policy::Algorithm;
/// use u_cpusched::scheduler::Scheduler;
///
/// let mut batch = vec![
///     Process::new("P1", 6).with_arrival_time(0),
///     Process::new("P2", 8).with_arrival_time(1),
///     Process::new("P3", 7).with_arrival_time(2),
///     Process::new("P4", 3).with_arrival_time(3),
///     Process::new("P5", 5).with_arrival_time(4),
/// ];
/// let outcome = Scheduler::new(Algorithm::Sjf).run(&mut batch).unwrap();
/// assert_eq!(batch[0].name, "P4");
/// assert!((outcome.stats.mean_waiting - 9.2).abs() < 1e-10);
/// assert!((outcome.stats.mean_turnaround - 15.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    algorithm: Algorithm,
    config: SchedulerConfig,
}

impl Scheduler {
    /// Creates a scheduler for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            config: SchedulerConfig::default(),
        }
    }

    /// Sets the run settings.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Schedules the batch in place.
    ///
    /// On success every process is annotated and the batch is left in
    /// service order. On error the batch is unchanged.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidInput`] if validation finds a fatal issue
    /// - [`ScheduleError::EmptyBatch`] if the batch has no processes
    pub fn run(&self, processes: &mut [Process]) -> Result<ScheduleOutcome> {
        debug!(
            "scheduling {} processes with {}",
            processes.len(),
            self.algorithm
        );

        let warnings = self.check(processes)?;
        if processes.is_empty() {
            warn!("rejected {} run: empty batch", self.algorithm);
            return Err(ScheduleError::EmptyBatch);
        }

        self.algorithm.policy().order(processes);
        let timeline = simulate(processes);
        let stats = BatchStats::calculate(processes)?;

        info!(
            "{}: {} processes, mean waiting {:.2}, mean turnaround {:.2}, makespan {}",
            self.algorithm,
            stats.process_count,
            stats.mean_waiting,
            stats.mean_turnaround,
            stats.makespan
        );

        Ok(ScheduleOutcome {
            algorithm: self.algorithm,
            timeline,
            stats,
            warnings,
        })
    }

    /// Schedules an owned request, returning the annotated batch.
    ///
    /// The request's own algorithm and settings are used.
    pub fn run_request(request: ScheduleRequest) -> Result<(Vec<Process>, ScheduleOutcome)> {
        let mut processes = request.processes;
        let outcome = Scheduler::new(request.algorithm)
            .with_config(request.config)
            .run(&mut processes)?;
        Ok((processes, outcome))
    }

    /// Runs every algorithm on its own copy of the batch.
    ///
    /// Each algorithm succeeds or fails on its own: a batch without
    /// priorities still yields FCFS and SJF statistics, with the Priority
    /// entry carrying its validation error. The caller's batch is not
    /// modified.
    pub fn compare(&self, processes: &[Process]) -> Vec<(Algorithm, Result<BatchStats>)> {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| {
                let mut copy = processes.to_vec();
                let stats = Scheduler::new(algorithm)
                    .with_config(self.config)
                    .run(&mut copy)
                    .map(|outcome| outcome.stats);
                (algorithm, stats)
            })
            .collect()
    }

    fn check(&self, processes: &[Process]) -> Result<Vec<ValidationError>> {
        if !self.config.validate {
            return Ok(Vec::new());
        }

        match validate_batch(processes, self.algorithm, self.config.strict_names) {
            Ok(advisories) => {
                for a in &advisories {
                    warn!("{a}");
                }
                Ok(advisories)
            }
            Err(errors) => {
                warn!(
                    "rejected {} run: {} validation issue(s)",
                    self.algorithm,
                    errors.len()
                );
                Err(ScheduleError::InvalidInput(errors))
            }
        }
    }
}
