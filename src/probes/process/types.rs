use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in the top-processes table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    /// Process name (executable name, no path)
    pub name: String,

    /// Cumulative CPU time consumed since process start, in seconds
    pub cpu_time_seconds: f64,

    /// Resident set size in MB, rounded to 2 decimals
    pub memory_mb: f64,
}

impl fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.1}s CPU - {:.2} MB",
            self.name, self.cpu_time_seconds, self.memory_mb
        )
    }
}
