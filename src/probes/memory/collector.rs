use anyhow::Result;
use sysinfo::System;

use super::types::MemoryRecord;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Raw physical memory counters in bytes
#[derive(Debug, Clone, Copy)]
pub struct MemorySample {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

/// Capability interface for physical memory counters
pub trait MemorySource {
    fn read(&mut self) -> Result<MemorySample>;
}

/// Default backend backed by the OS memory counters
pub struct SysinfoMemorySource {
    sys: System,
}

impl SysinfoMemorySource {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl MemorySource for SysinfoMemorySource {
    fn read(&mut self) -> Result<MemorySample> {
        self.sys.refresh_memory();
        Ok(MemorySample {
            total_bytes: self.sys.total_memory(),
            free_bytes: self.sys.free_memory(),
        })
    }
}

pub struct MemoryCollector<S = SysinfoMemorySource> {
    source: S,
}

impl MemoryCollector<SysinfoMemorySource> {
    pub fn new() -> Self {
        Self {
            source: SysinfoMemorySource::new(),
        }
    }
}

impl<S: MemorySource> MemoryCollector<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn collect(&mut self) -> Result<MemoryRecord> {
        let sample = self.source.read()?;
        let used_percent = if sample.total_bytes > 0 {
            let used = sample.total_bytes.saturating_sub(sample.free_bytes);
            (used as f64 / sample.total_bytes as f64) * 100.0
        } else {
            0.0
        };

        Ok(MemoryRecord {
            used_percent: round2(used_percent),
            free_gb: round2(sample.free_bytes as f64 / BYTES_PER_GB),
            total_gb: round2(sample.total_bytes as f64 / BYTES_PER_GB),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
