pub mod collector;
pub mod types;

pub use collector::{DiskCollector, SysinfoVolumeSource, VolumeSource, VolumeStat};
pub use types::DiskRecord;
