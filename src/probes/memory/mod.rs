pub mod collector;
pub mod types;

pub use collector::{MemoryCollector, MemorySample, MemorySource, SysinfoMemorySource};
pub use types::MemoryRecord;
