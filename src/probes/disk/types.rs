use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of free space on one fixed local volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskRecord {
    /// Volume identifier (mount point or drive letter)
    pub drive: String,

    /// Free space as a percentage of total capacity, rounded to 2 decimals
    pub free_space_percent: f64,

    /// Free space in GB, rounded to 2 decimals
    pub free_space_gb: f64,

    /// Total capacity in GB, rounded to 2 decimals
    pub total_space_gb: f64,
}

impl fmt::Display for DiskRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} GB free of {:.2} GB ({:.2}% free)",
            self.drive, self.free_space_gb, self.total_space_gb, self.free_space_percent
        )
    }
}
