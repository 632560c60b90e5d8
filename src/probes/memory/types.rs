use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical memory usage snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryRecord {
    /// Used memory as a percentage of total, rounded to 2 decimals
    pub used_percent: f64,

    /// Free physical memory in GB, rounded to 2 decimals
    pub free_gb: f64,

    /// Total physical memory in GB, rounded to 2 decimals
    pub total_gb: f64,
}

impl fmt::Display for MemoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} GB free of {:.2} GB ({:.2}% used)",
            self.free_gb, self.total_gb, self.used_percent
        )
    }
}
