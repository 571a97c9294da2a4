//! Ordering policies for non-preemptive CPU scheduling.
//!
//! A policy decides the order in which a batch of processes is served.
//! The three built-in rules (FCFS, SJF, Priority) differ only here; the
//! timeline walk that follows is shared.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::policy::{rules, OrderingPolicy};
//!
//! let mut batch = vec![Process::new("long", 8), Process::new("short", 3)];
//! rules::Sjf.order(&mut batch);
//! assert_eq!(batch[0].name, "short");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
pub mod rules;

pub use algorithm::{Algorithm, ParseAlgorithmError};

use crate::models::Process;
use std::fmt::Debug;

/// Rank returned by an ordering policy.
///
/// Lower ranks are served first.
pub type RankKey = i64;

/// A total ordering over a batch of processes.
///
/// # Rank Convention
/// **Lower rank = served earlier.** Processes with equal rank keep their
/// relative input order (all sorts are stable).
pub trait OrderingPolicy: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Rank of a process under this policy.
    fn rank(&self, process: &Process) -> RankKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Indices into `processes` in service order.
    fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by_key(|&i| self.rank(&processes[i]));
        indices
    }

    /// Reorders the batch in place into service order.
    ///
    /// Only positions change; no process fields are touched.
    fn order(&self, processes: &mut [Process]) {
        processes.sort_by_key(|p| self.rank(p));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indices_matches_order() {
        let batch = vec![
            Process::new("A", 5),
            Process::new("B", 2),
            Process::new("C", 5),
            Process::new("D", 1),
        ];
        let indices = rules::Sjf.sort_indices(&batch);

        let mut ordered = batch.clone();
        rules::Sjf.order(&mut ordered);

        let via_indices: Vec<&str> = indices.iter().map(|&i| batch[i].name.as_str()).collect();
        let via_order: Vec<&str> = ordered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(via_indices, via_order);
        assert_eq!(via_order, vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn test_order_empty() {
        let mut empty: Vec<Process> = Vec::new();
        for algorithm in Algorithm::ALL {
            algorithm.policy().order(&mut empty);
            assert!(empty.is_empty());
            assert!(algorithm.policy().sort_indices(&empty).is_empty());
        }
    }
}
