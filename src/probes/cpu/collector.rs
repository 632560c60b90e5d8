use anyhow::Result;
use sysinfo::System;

use super::types::CpuRecord;

/// One sampling of the aggregate processor state
#[derive(Debug, Clone)]
pub struct CpuSample {
    pub load_percent: Option<f32>,
    pub name: String,
}

/// Capability interface for processor load sampling
pub trait CpuSource {
    fn sample(&mut self) -> Result<CpuSample>;
}

/// Default backend backed by the OS processor counters
pub struct SysinfoCpuSource {
    sys: System,
}

impl SysinfoCpuSource {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu(); // Initial refresh to get baseline CPU metrics
        Self { sys }
    }
}

impl CpuSource for SysinfoCpuSource {
    fn sample(&mut self) -> Result<CpuSample> {
        // Two refreshes with a pause in between; usage is a delta measurement
        self.sys.refresh_cpu();
        std::thread::sleep(std::time::Duration::from_millis(500));
        self.sys.refresh_cpu();

        let cpus = self.sys.cpus();
        if cpus.is_empty() {
            return Ok(CpuSample {
                load_percent: None,
                name: "unknown processor".to_string(),
            });
        }

        let sum: f32 = cpus.iter().map(|cpu| cpu.cpu_usage()).sum();
        let load = sum / cpus.len() as f32;
        let name = cpus[0].brand().trim().to_string();

        Ok(CpuSample {
            load_percent: Some(load),
            name: if name.is_empty() {
                "unknown processor".to_string()
            } else {
                name
            },
        })
    }
}

pub struct CpuCollector<S = SysinfoCpuSource> {
    source: S,
}

impl CpuCollector<SysinfoCpuSource> {
    pub fn new() -> Self {
        Self {
            source: SysinfoCpuSource::new(),
        }
    }
}

impl<S: CpuSource> CpuCollector<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn collect(&mut self) -> Result<CpuRecord> {
        let sample = self.source.sample()?;
        let load_percent = sample
            .load_percent
            .map(|load| load.round().clamp(0.0, 100.0) as u8);

        Ok(CpuRecord {
            load_percent,
            name: sample.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeCpu(CpuSample);

    impl CpuSource for FakeCpu {
        fn sample(&mut self) -> Result<CpuSample> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_load_is_rounded_to_whole_percent() {
        let mut collector = CpuCollector::with_source(FakeCpu(CpuSample {
            load_percent: Some(41.7),
            name: "Test CPU".to_string(),
        }));

        let record = collector.collect().unwrap();
        assert_eq!(record.load_percent, Some(42));
        assert_eq!(record.name, "Test CPU");
    }

    #[test]
    fn test_load_is_clamped_to_valid_range() {
        let mut collector = CpuCollector::with_source(FakeCpu(CpuSample {
            load_percent: Some(101.3),
            name: "Test CPU".to_string(),
        }));

        assert_eq!(collector.collect().unwrap().load_percent, Some(100));
    }

    #[test]
    fn test_absent_load_is_preserved() {
        let mut collector = CpuCollector::with_source(FakeCpu(CpuSample {
            load_percent: None,
            name: "Test CPU".to_string(),
        }));

        assert_eq!(collector.collect().unwrap().load_percent, None);
    }
}
