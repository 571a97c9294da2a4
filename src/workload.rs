//! Random batch generation.
//!
//! Produces reproducible batches for exercising the scheduling
//! policies: processes `P1..Pn` with uniformly drawn execution times
//! and priorities, and arrival times that never decrease.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Shape of a generated batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Smallest execution time (inclusive).
    pub min_execution: i64,
    /// Largest execution time (inclusive).
    pub max_execution: i64,
    /// Priorities are drawn from `1..=max_priority`.
    pub max_priority: i32,
    /// Largest gap between consecutive arrivals.
    pub arrival_step: i64,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with textbook-sized defaults.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            min_execution: 1,
            max_execution: 10,
            max_priority: 5,
            arrival_step: 2,
        }
    }

    /// Sets the execution time range (inclusive).
    pub fn with_execution_range(mut self, min: i64, max: i64) -> Self {
        self.min_execution = min;
        self.max_execution = max.max(min);
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(1);
        self
    }

    /// Sets the largest gap between arrivals.
    pub fn with_arrival_step(mut self, step: i64) -> Self {
        self.arrival_step = step.max(0);
        self
    }
}

/// Generates a batch from the given random source.
pub fn random_batch<R: Rng>(spec: &WorkloadSpec, rng: &mut R) -> Vec<Process> {
    let max_execution = spec.max_execution.max(spec.min_execution);
    let max_priority = spec.max_priority.max(1);
    let arrival_step = spec.arrival_step.max(0);

    let mut arrival = 0;
    (0..spec.count)
        .map(|i| {
            let execution = rng.random_range(spec.min_execution..=max_execution);
            let priority = rng.random_range(1..=max_priority);
            let process = Process::new(format!("P{}", i + 1), execution)
                .with_arrival_time(arrival)
                .with_priority(priority);
            arrival += rng.random_range(0..=arrival_step);
            process
        })
        .collect()
}

/// Generates a reproducible batch from a seed.
pub fn seeded_batch(spec: &WorkloadSpec, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_batch(spec, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let spec = WorkloadSpec::new(20);
        assert_eq!(seeded_batch(&spec, 7), seeded_batch(&spec, 7));
    }

    #[test]
    fn test_batch_shape() {
        let spec = WorkloadSpec::new(30)
            .with_execution_range(2, 4)
            .with_max_priority(3)
            .with_arrival_step(5);
        let batch = seeded_batch(&spec, 42);

        assert_eq!(batch.len(), 30);
        assert_eq!(batch[0].name, "P1");
        assert_eq!(batch[29].name, "P30");
        assert_eq!(batch[0].arrival_time, Some(0));
        for p in &batch {
            assert!((2..=4).contains(&p.execution_time));
            assert!((1..=3).contains(&p.priority.unwrap()));
            assert!(!p.is_scheduled());
        }
        for pair in batch.windows(2) {
            let gap = pair[1].arrival_time.unwrap() - pair[0].arrival_time.unwrap();
            assert!((0..=5).contains(&gap));
        }
    }

    #[test]
    fn test_empty_spec() {
        assert!(seeded_batch(&WorkloadSpec::new(0), 1).is_empty());
    }

    #[test]
    fn test_degenerate_ranges_clamped() {
        let spec = WorkloadSpec::new(5)
            .with_execution_range(3, 1)
            .with_max_priority(0)
            .with_arrival_step(-4);
        let batch = seeded_batch(&spec, 3);
        assert!(batch.iter().all(|p| p.execution_time == 3));
        assert!(batch.iter().all(|p| p.priority == Some(1)));
        assert!(batch.iter().all(|p| p.arrival_time == Some(0)));
    }
}
