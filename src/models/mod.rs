//! CPU scheduling domain models.
//!
//! Provides the data types a scheduling run reads and writes: the
//! [`Process`] record and the [`Timeline`] a simulation lays out.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook term |
//! |------------|---------------|
//! | Process | Job / PCB |
//! | TimeSlot | Gantt bar |
//! | Timeline | Gantt chart |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{TimeSlot, Timeline};
