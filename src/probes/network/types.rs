use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of the single internet reachability test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub internet_connected: bool,
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.internet_connected {
            write!(f, "connected")
        } else {
            write!(f, "disconnected")
        }
    }
}
