use anyhow::Result;
use sysinfo::Disks;

use super::types::DiskRecord;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Raw capacity numbers for one volume, before any derivation
#[derive(Debug, Clone)]
pub struct VolumeStat {
    pub name: String,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

/// Capability interface for volume enumeration, so alternate backends
/// can be substituted without touching the record derivation.
pub trait VolumeSource {
    fn volumes(&mut self) -> Result<Vec<VolumeStat>>;
}

/// Default backend backed by the OS disk list
pub struct SysinfoVolumeSource;

impl VolumeSource for SysinfoVolumeSource {
    fn volumes(&mut self) -> Result<Vec<VolumeStat>> {
        let disks = Disks::new_with_refreshed_list();
        Ok(disks
            .list()
            .iter()
            .map(|disk| VolumeStat {
                name: disk.mount_point().to_string_lossy().to_string(),
                total_bytes: disk.total_space(),
                available_bytes: disk.available_space(),
            })
            .collect())
    }
}

pub struct DiskCollector<S = SysinfoVolumeSource> {
    source: S,
}

impl DiskCollector<SysinfoVolumeSource> {
    pub fn new() -> Self {
        Self {
            source: SysinfoVolumeSource,
        }
    }
}

impl<S: VolumeSource> DiskCollector<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Collect one record per volume with nonzero capacity
    pub fn collect(&mut self) -> Result<Vec<DiskRecord>> {
        let records = self
            .source
            .volumes()?
            .into_iter()
            .filter(|volume| volume.total_bytes > 0)
            .map(|volume| {
                let free_percent =
                    (volume.available_bytes as f64 / volume.total_bytes as f64) * 100.0;
                DiskRecord {
                    drive: volume.name,
                    free_space_percent: round2(free_percent),
                    free_space_gb: round2(volume.available_bytes as f64 / BYTES_PER_GB),
                    total_space_gb: round2(volume.total_bytes as f64 / BYTES_PER_GB),
                }
            })
            .collect();

        Ok(records)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
