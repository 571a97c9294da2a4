//! Plain-text rendering of scheduling results.
//!
//! One line per process in service order, then the batch means.

use std::fmt;

use crate::error::Result;
use crate::models::Process;
use crate::policy::Algorithm;
use crate::scheduler::BatchStats;

/// An annotated batch with its statistics, displayed as text.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    processes: &'a [Process],
    stats: &'a BatchStats,
}

impl<'a> Report<'a> {
    /// Wraps an annotated batch and its statistics.
    pub fn new(processes: &'a [Process], stats: &'a BatchStats) -> Self {
        Self { processes, stats }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.processes {
            writeln!(f, "{p}")?;
        }
        writeln!(f, "Average waiting time: {:.2}", self.stats.mean_waiting)?;
        writeln!(f, "Average turnaround time: {:.2}", self.stats.mean_turnaround)
    }
}

/// Per-algorithm results, displayed one line each.
///
/// Rejected algorithms show the rejection reason instead of statistics.
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    results: &'a [(Algorithm, Result<BatchStats>)],
}

impl<'a> Comparison<'a> {
    /// Wraps the output of [`Scheduler::compare`](crate::scheduler::Scheduler::compare).
    pub fn new(results: &'a [(Algorithm, Result<BatchStats>)]) -> Self {
        Self { results }
    }
}

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (algorithm, result) in self.results {
            let name = algorithm.to_string();
            match result {
                Ok(stats) => writeln!(
                    f,
                    "{name:<8} waiting={:.2} turnaround={:.2} makespan={}",
                    stats.mean_waiting, stats.mean_turnaround, stats.makespan
                )?,
                Err(err) => writeln!(f, "{name:<8} rejected: {err}")?,
            }
        }
        Ok(())
    }
}

/// Renders an annotated batch and its statistics.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::policy::Algorithm;
/// use u_cpusched::report::render;
/// use u_cpusched::scheduler::Scheduler;
///
/// let mut batch = vec![Process::new("P1", 6), Process::new("P2", 8)];
/// let outcome = Scheduler::new(Algorithm::Fcfs).run(&mut batch).unwrap();
/// let text = render(&batch, &outcome.stats);
/// assert!(text.starts_with("Process P1: execution=6, waiting=0, turnaround=6\n"));
/// ```
pub fn render(processes: &[Process], stats: &BatchStats) -> String {
    Report::new(processes, stats).to_string()
}

/// Renders one summary line per algorithm.
pub fn render_comparison(results: &[(Algorithm, Result<BatchStats>)]) -> String {
    Comparison::new(results).to_string()
}
