pub mod collector;
pub mod types;

pub use collector::{ProcessCollector, ProcessSource, ProcessStat, PsProcessSource};
pub use types::ProcessRecord;
