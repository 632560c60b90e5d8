use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate processor load and identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuRecord {
    /// Aggregate load in whole percent (0-100). Absent on platforms
    /// where no load figure is reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_percent: Option<u8>,

    /// Processor name as reported by the OS
    pub name: String,
}

impl fmt::Display for CpuRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.load_percent {
            Some(load) => write!(f, "{} - load {}%", self.name, load),
            None => write!(f, "{} - load unavailable", self.name),
        }
    }
}
