use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder reported when the update facility cannot be queried
pub const UNAVAILABLE_SENTINEL: &str = "unavailable";

/// Count of not-yet-installed updates, or the unavailability sentinel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub pending_updates: PendingUpdates,
}

/// Serializes as either a non-negative integer or the literal
/// sentinel string, never both and never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PendingUpdates {
    Count(u32),
    Unavailable(String),
}

impl UpdateStatus {
    pub fn pending(count: u32) -> Self {
        Self {
            pending_updates: PendingUpdates::Count(count),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            pending_updates: PendingUpdates::Unavailable(UNAVAILABLE_SENTINEL.to_string()),
        }
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pending_updates {
            PendingUpdates::Count(count) => write!(f, "{}", count),
            PendingUpdates::Unavailable(sentinel) => write!(f, "{}", sentinel),
        }
    }
}
