//! Timeline (simulation result) model.
//!
//! A timeline records the service interval of every process on the
//! single CPU, in the order the processes were served.

use serde::{Deserialize, Serialize};

/// The CPU timeline produced by one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Service intervals in service order.
    pub slots: Vec<TimeSlot>,
}

/// A process-time interval on the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Served process name.
    pub process_name: String,
    /// Start time (ticks).
    pub start: i64,
    /// End time (ticks).
    pub end: i64,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(process_name: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_name: process_name.into(),
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot.
    pub fn push(&mut self, slot: TimeSlot) {
        self.slots.push(slot);
    }

    /// Final clock value: end of the last slot, or 0 for an empty run.
    pub fn clock(&self) -> i64 {
        self.slots.last().map(|s| s.end).unwrap_or(0)
    }

    /// Finds the first slot served for the given process name.
    pub fn slot_for(&self, process_name: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.process_name == process_name)
    }

    /// Process names in service order.
    pub fn service_order(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.process_name.as_str()).collect()
    }

    /// Total time the CPU sat idle between slots.
    ///
    /// Slots are laid back to back, so this is zero for any timeline
    /// produced from non-negative execution times.
    pub fn idle_time(&self) -> i64 {
        let mut idle = 0;
        let mut cursor = 0;
        for slot in &self.slots {
            if slot.start > cursor {
                idle += slot.start - cursor;
            }
            cursor = slot.end;
        }
        idle
    }

    /// Busy time over the final clock.
    ///
    /// Returns `None` if the clock is zero.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.clock();
        if horizon <= 0 {
            return None;
        }
        let busy: i64 = self.slots.iter().map(|s| s.duration()).sum();
        Some(busy as f64 / horizon as f64)
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(TimeSlot::new("P4", 0, 3));
        t.push(TimeSlot::new("P5", 3, 8));
        t.push(TimeSlot::new("P1", 8, 14));
        t
    }

    #[test]
    fn test_timeline_clock() {
        assert_eq!(sample_timeline().clock(), 14);
    }

    #[test]
    fn test_slot_for() {
        let t = sample_timeline();
        let slot = t.slot_for("P5").unwrap();
        assert_eq!(slot.start, 3);
        assert_eq!(slot.duration(), 5);
        assert!(t.slot_for("P9").is_none());
    }

    #[test]
    fn test_service_order() {
        assert_eq!(sample_timeline().service_order(), vec!["P4", "P5", "P1"]);
    }

    #[test]
    fn test_idle_and_utilization() {
        let t = sample_timeline();
        assert_eq!(t.idle_time(), 0);
        assert!((t.utilization().unwrap() - 1.0).abs() < 1e-10);

        let mut gappy = Timeline::new();
        gappy.push(TimeSlot::new("A", 2, 4));
        assert_eq!(gappy.idle_time(), 2);
        assert!((gappy.utilization().unwrap() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.clock(), 0);
        assert_eq!(t.slot_count(), 0);
        assert_eq!(t.idle_time(), 0);
        assert!(t.utilization().is_none());
    }
}
