//! Non-preemptive single-CPU timeline walk.
//!
//! # Algorithm
//!
//! 1. Start the clock at 0.
//! 2. For each process in the given order, start it at the current clock.
//! 3. Waiting time = start, turnaround time = start + execution time.
//! 4. Advance the clock by the execution time.
//!
//! Arrival times are not consulted. The walk is shared by every
//! ordering policy; only the order of the input differs.
//!
//! # Complexity
//! O(n) in batch size.

use crate::models::{Process, TimeSlot, Timeline};

/// Simulates the batch in its current order and annotates every process.
///
/// Performs no validation: a negative execution time moves the clock
/// backwards. Run [`validate_batch`](crate::validation::validate_batch)
/// first, or use [`Scheduler`](super::Scheduler), which does.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::simulate;
///
/// let mut batch = vec![Process::new("P1", 6), Process::new("P2", 8)];
/// let timeline = simulate(&mut batch);
/// assert_eq!(batch[1].waiting_time(), 6);
/// assert_eq!(timeline.clock(), 14);
/// ```
pub fn simulate(processes: &mut [Process]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    for process in processes.iter_mut() {
        let start = clock;
        process.record_service(start);
        clock += process.execution_time;
        timeline.push(TimeSlot::new(&process.name, start, clock));
    }

    timeline
}
