//! Non-preemptive CPU scheduling for operating-systems coursework and simulation.
//!
//! Computes per-process waiting and turnaround times and batch means
//! under First-Come-First-Served, Shortest-Job-First, and Priority
//! scheduling on a single CPU.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Timeline`, `TimeSlot`
//! - **`policy`**: Ordering rules (`Fcfs`, `Sjf`, `Priority`) and the `Algorithm` selector
//! - **`scheduler`**: Timeline walk (`simulate`), `BatchStats`, and the `Scheduler` driver
//! - **`validation`**: Input checks (negative times, missing priorities, duplicate names)
//! - **`report`**: Plain-text rendering of results
//! - **`workload`**: Seeded random batches
//!
//! # Data Flow
//!
//! raw batch → ordering policy → timeline walk → annotated batch → `BatchStats`
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod policy;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, ScheduleError};
