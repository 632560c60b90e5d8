pub mod collector;
pub mod types;

pub use collector::{CpuCollector, CpuSample, CpuSource, SysinfoCpuSource};
pub use types::CpuRecord;
