//! Built-in ordering rules.
//!
//! - **FCFS**: input order is arrival order, nothing is sorted
//! - **SJF**: shortest execution time first
//! - **Priority**: lowest priority value first
//!
//! # Rank Convention
//! All rules return lower ranks for processes served earlier.

use super::{OrderingPolicy, RankKey};
use crate::models::Process;

/// First-Come, First-Served.
///
/// Serves processes in the order they were supplied. Arrival times, if
/// present, are not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl OrderingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn rank(&self, _process: &Process) -> RankKey {
        0
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }

    fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        (0..processes.len()).collect()
    }

    fn order(&self, _processes: &mut [Process]) {}
}

/// Shortest Job First.
///
/// Minimizes mean waiting time for a batch that is fully present at t=0.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl OrderingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn rank(&self, process: &Process) -> RankKey {
        process.execution_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Priority scheduling.
///
/// Lower numeric priority is served first. Processes without a
/// priority rank last.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl OrderingPolicy for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn rank(&self, process: &Process) -> RankKey {
        process.priority.map(RankKey::from).unwrap_or(RankKey::MAX)
    }

    fn description(&self) -> &'static str {
        "Priority (lower value first)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(batch: &[Process]) -> Vec<&str> {
        batch.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_fcfs_keeps_input_order() {
        let mut batch = vec![
            Process::new("P1", 6).with_arrival_time(4),
            Process::new("P2", 8).with_arrival_time(0),
            Process::new("P3", 1).with_arrival_time(2),
        ];
        let before = batch.clone();
        Fcfs.order(&mut batch);
        assert_eq!(batch, before);
        assert_eq!(Fcfs.sort_indices(&batch), vec![0, 1, 2]);
    }

    #[test]
    fn test_sjf_ordering() {
        let mut batch = vec![
            Process::new("P1", 6).with_arrival_time(0),
            Process::new("P2", 8).with_arrival_time(1),
            Process::new("P3", 7).with_arrival_time(2),
            Process::new("P4", 3).with_arrival_time(3),
            Process::new("P5", 5).with_arrival_time(4),
        ];
        Sjf.order(&mut batch);
        assert_eq!(names(&batch), vec!["P4", "P5", "P1", "P3", "P2"]);
    }

    #[test]
    fn test_sjf_ties_keep_input_order() {
        let mut batch = vec![
            Process::new("A", 4),
            Process::new("B", 2),
            Process::new("C", 4),
            Process::new("D", 2),
        ];
        Sjf.order(&mut batch);
        assert_eq!(names(&batch), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_priority_ordering_with_ties() {
        let mut batch = vec![
            Process::new("P1", 6).with_priority(2),
            Process::new("P2", 8).with_priority(1),
            Process::new("P3", 7).with_priority(3),
            Process::new("P4", 3).with_priority(2),
            Process::new("P5", 5).with_priority(1),
        ];
        Priority.order(&mut batch);
        assert_eq!(names(&batch), vec!["P2", "P5", "P1", "P4", "P3"]);
    }

    #[test]
    fn test_priority_missing_ranks_last() {
        let with = Process::new("with", 1).with_priority(100);
        let without = Process::new("without", 1);
        assert!(Priority.rank(&with) < Priority.rank(&without));
    }

    #[test]
    fn test_priority_negative_values() {
        let mut batch = vec![
            Process::new("zero", 1).with_priority(0),
            Process::new("neg", 1).with_priority(-5),
        ];
        Priority.order(&mut batch);
        assert_eq!(names(&batch), vec!["neg", "zero"]);
    }

    #[test]
    fn test_order_leaves_fields_untouched() {
        let mut batch = vec![
            Process::new("A", 9).with_priority(2).with_arrival_time(1),
            Process::new("B", 1).with_priority(1).with_arrival_time(0),
        ];
        let mut expected = batch.clone();
        expected.reverse();
        Sjf.order(&mut batch);
        assert_eq!(batch, expected);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(Sjf.description(), "Shortest Job First");
        assert_eq!(Priority.name(), "PRIORITY");
    }
}
