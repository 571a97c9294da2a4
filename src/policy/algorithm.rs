//! Algorithm selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{rules, OrderingPolicy};

/// The scheduling algorithms a driver can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-Come, First-Served.
    #[default]
    Fcfs,
    /// Shortest Job First.
    Sjf,
    /// Priority (lower value first).
    Priority,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority];

    /// The ordering rule behind this algorithm.
    pub fn policy(self) -> &'static dyn OrderingPolicy {
        match self {
            Algorithm::Fcfs => &rules::Fcfs,
            Algorithm::Sjf => &rules::Sjf,
            Algorithm::Priority => &rules::Priority,
        }
    }

    /// Whether every process must carry a priority.
    pub fn requires_priority(self) -> bool {
        matches!(self, Algorithm::Priority)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy().name())
    }
}

/// Error returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scheduling algorithm '{}' (expected fcfs, sjf or priority)",
            self.input
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "priority" => Ok(Algorithm::Priority),
            _ => Err(ParseAlgorithmError {
                input: s.to_string(),
            }),
        }
    }
}
