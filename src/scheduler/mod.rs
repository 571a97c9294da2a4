//! Timeline simulation, batch statistics, and the scheduling driver.
//!
//! # Algorithm
//!
//! Every policy feeds the same non-preemptive walk: the batch is put in
//! service order, then each process starts when the previous one ends.
//!
//! # Statistics
//!
//! `BatchStats` computes mean waiting and turnaround times, makespan,
//! and throughput from an annotated batch.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod runner;
mod simulate;
mod stats;

pub use runner::{ScheduleOutcome, ScheduleRequest, Scheduler, SchedulerConfig};
pub use simulate::simulate;
pub use stats::BatchStats;
