pub mod collector;
pub mod types;

pub use collector::{PlatformUpdateSource, UpdateCollector, UpdateSource};
pub use types::{PendingUpdates, UpdateStatus, UNAVAILABLE_SENTINEL};
