//! Process model.
//!
//! A process is a unit of CPU work in a single scheduling batch.
//! Input fields are set by the caller; the timing fields are written
//! only by [`simulate`](crate::scheduler::simulate).
//!
//! # Time Representation
//! All times are integer ticks relative to the start of the batch (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A process to be scheduled.
///
/// `arrival_time` and `priority` are optional: FCFS batches carry
/// neither, SJF batches usually carry arrival times, and Priority
/// batches must carry a priority for every process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (unique within a batch for display purposes).
    pub name: String,
    /// CPU time required (ticks).
    pub execution_time: i64,
    /// Time the process entered the system. Stored, never used for gating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<i64>,
    /// Scheduling priority (lower = served earlier).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_deserializing)]
    waiting_time: i64,
    #[serde(default, skip_deserializing)]
    turnaround_time: i64,
    #[serde(skip)]
    scheduled: bool,
}

impl Process {
    /// Creates a process with the given name and execution time.
    pub fn new(name: impl Into<String>, execution_time: i64) -> Self {
        Self {
            name: name.into(),
            execution_time,
            arrival_time: None,
            priority: None,
            waiting_time: 0,
            turnaround_time: 0,
            scheduled: false,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = Some(arrival_time);
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Time spent ready before service started.
    #[inline]
    pub fn waiting_time(&self) -> i64 {
        self.waiting_time
    }

    /// Waiting time plus execution time.
    #[inline]
    pub fn turnaround_time(&self) -> i64 {
        self.turnaround_time
    }

    /// Clock value at which the process finished.
    ///
    /// Every process baselines at t=0, so this equals the turnaround time.
    #[inline]
    pub fn completion_time(&self) -> i64 {
        self.turnaround_time
    }

    /// Whether a simulation run has written the timing fields.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Records the service interval starting at `start`.
    pub(crate) fn record_service(&mut self, start: i64) {
        self.waiting_time = start;
        self.turnaround_time = start + self.execution_time;
        self.scheduled = true;
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Process {}: ", self.name)?;
        if let Some(arrival) = self.arrival_time {
            write!(f, "arrival={arrival}, ")?;
        }
        write!(f, "execution={}, ", self.execution_time)?;
        if let Some(priority) = self.priority {
            write!(f, "priority={priority}, ")?;
        }
        write!(
            f,
            "waiting={}, turnaround={}",
            self.waiting_time, self.turnaround_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 6).with_arrival_time(2).with_priority(3);
        assert_eq!(p.name, "P1");
        assert_eq!(p.execution_time, 6);
        assert_eq!(p.arrival_time, Some(2));
        assert_eq!(p.priority, Some(3));
        assert_eq!(p.waiting_time(), 0);
        assert_eq!(p.turnaround_time(), 0);
        assert!(!p.is_scheduled());
    }

    #[test]
    fn test_record_service() {
        let mut p = Process::new("P1", 6);
        p.record_service(14);
        assert_eq!(p.waiting_time(), 14);
        assert_eq!(p.turnaround_time(), 20);
        assert_eq!(p.completion_time(), 20);
        assert!(p.is_scheduled());
    }

    #[test]
    fn test_display_fcfs_shape() {
        let mut p = Process::new("P2", 8);
        p.record_service(6);
        assert_eq!(
            p.to_string(),
            "Process P2: execution=8, waiting=6, turnaround=14"
        );
    }

    #[test]
    fn test_display_priority_shape() {
        let p = Process::new("P1", 6).with_arrival_time(0).with_priority(2);
        assert_eq!(
            p.to_string(),
            "Process P1: arrival=0, execution=6, priority=2, waiting=0, turnaround=0"
        );
    }

    #[test]
    fn test_deserialize_ignores_outputs() {
        let json = r#"{"name":"P1","execution_time":5,"waiting_time":99,"turnaround_time":99}"#;
        let p: Process = serde_json::from_str(json).unwrap();
        assert_eq!(p.execution_time, 5);
        assert_eq!(p.waiting_time(), 0);
        assert_eq!(p.turnaround_time(), 0);
        assert_eq!(p.arrival_time, None);
    }

    #[test]
    fn test_serialize_includes_outputs() {
        let mut p = Process::new("P1", 5).with_priority(1);
        p.record_service(3);
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["waiting_time"], 3);
        assert_eq!(value["turnaround_time"], 8);
        assert_eq!(value["priority"], 1);
        assert!(value.get("arrival_time").is_none());
    }
}
