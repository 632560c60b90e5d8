pub mod writer;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::probes::cpu::types::CpuRecord;
use crate::probes::disk::types::DiskRecord;
use crate::probes::memory::types::MemoryRecord;
use crate::probes::network::types::NetworkStatus;
use crate::probes::process::types::ProcessRecord;
use crate::probes::updates::types::UpdateStatus;

/// One probe that failed during the run, kept alongside the sections
/// that did succeed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeFailure {
    pub probe: String,
    pub error: String,
}

/// Everything the probes produced for a single run. The network and
/// update probes degrade internally, so only the other four carry a
/// Result here.
pub struct ProbeOutcomes {
    pub disk: Result<Vec<DiskRecord>>,
    pub cpu: Result<CpuRecord>,
    pub memory: Result<MemoryRecord>,
    pub top_processes: Result<Vec<ProcessRecord>>,
    pub network: NetworkStatus,
    pub updates: UpdateStatus,
}

/// Complete snapshot written to disk and echoed to the console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub report_id: String,
    pub computer_name: String,
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<Vec<DiskRecord>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_processes: Option<Vec<ProcessRecord>>,

    pub network: NetworkStatus,
    pub updates: UpdateStatus,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ProbeFailure>,
}

impl HealthReport {
    /// Fold probe outcomes into a report. A failed probe leaves its
    /// section absent and adds an entry to `errors`; the run itself
    /// never aborts here.
    pub fn assemble(computer_name: String, timestamp: DateTime<Utc>, outcomes: ProbeOutcomes) -> Self {
        let mut errors = Vec::new();

        let disk = record_outcome("disk", outcomes.disk, &mut errors);
        let cpu = record_outcome("cpu", outcomes.cpu, &mut errors);
        let memory = record_outcome("memory", outcomes.memory, &mut errors);
        let top_processes = record_outcome("topProcesses", outcomes.top_processes, &mut errors);

        Self {
            report_id: Uuid::new_v4().to_string(),
            computer_name,
            timestamp,
            disk,
            cpu,
            memory,
            top_processes,
            network: outcomes.network,
            updates: outcomes.updates,
            errors,
        }
    }
}

fn record_outcome<T>(probe: &str, outcome: Result<T>, errors: &mut Vec<ProbeFailure>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(ProbeFailure {
                probe: probe.to_string(),
                error: format!("{:#}", err),
            });
            None
        }
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System Health Check:")?;
        writeln!(f, "  Computer: {}", self.computer_name)?;
        writeln!(f, "  Taken At: {}", self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f, "  Report ID: {}", self.report_id)?;

        writeln!(f, "\nDisk Space:")?;
        match &self.disk {
            Some(disks) if disks.is_empty() => writeln!(f, "  No fixed volumes found")?,
            Some(disks) => {
                for disk in disks {
                    writeln!(f, "  {}", disk)?;
                }
            }
            None => writeln!(f, "  unavailable")?,
        }

        writeln!(f, "\nCPU:")?;
        match &self.cpu {
            Some(cpu) => writeln!(f, "  {}", cpu)?,
            None => writeln!(f, "  unavailable")?,
        }

        writeln!(f, "\nMemory:")?;
        match &self.memory {
            Some(memory) => writeln!(f, "  {}", memory)?,
            None => writeln!(f, "  unavailable")?,
        }

        writeln!(f, "\nTop Processes by CPU Time:")?;
        match &self.top_processes {
            Some(processes) if processes.is_empty() => writeln!(f, "  No processes visible")?,
            Some(processes) => {
                for process in processes {
                    writeln!(f, "  {}", process)?;
                }
            }
            None => writeln!(f, "  unavailable")?,
        }

        writeln!(f, "\nNetwork:")?;
        writeln!(f, "  Internet: {}", self.network)?;

        writeln!(f, "\nUpdates:")?;
        writeln!(f, "  Pending: {}", self.updates)?;

        if !self.errors.is_empty() {
            writeln!(f, "\nProbe Failures:")?;
            for failure in &self.errors {
                writeln!(f, "  {}: {}", failure.probe, failure.error)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use crate::probes::updates::types::PendingUpdates;

    fn sample_outcomes() -> ProbeOutcomes {
        ProbeOutcomes {
            disk: Ok(vec![DiskRecord {
                drive: "/".to_string(),
                free_space_percent: 25.0,
                free_space_gb: 25.0,
                total_space_gb: 100.0,
            }]),
            cpu: Ok(CpuRecord {
                load_percent: Some(42),
                name: "Test CPU".to_string(),
            }),
            memory: Ok(MemoryRecord {
                used_percent: 75.0,
                free_gb: 4.0,
                total_gb: 16.0,
            }),
            top_processes: Ok(vec![
                ProcessRecord {
                    name: "kernel_task".to_string(),
                    cpu_time_seconds: 3600.0,
                    memory_mb: 512.0,
                },
                ProcessRecord {
                    name: "chrome".to_string(),
                    cpu_time_seconds: 1800.0,
                    memory_mb: 1024.0,
                },
                ProcessRecord {
                    name: "sshd".to_string(),
                    cpu_time_seconds: 12.5,
                    memory_mb: 8.25,
                },
            ]),
            network: NetworkStatus {
                internet_connected: true,
            },
            updates: UpdateStatus::unavailable(),
        }
    }

    #[test]
    fn test_all_probes_successful_yields_no_errors() {
        let report = HealthReport::assemble(
            "test-host".to_string(),
            Utc::now(),
            sample_outcomes(),
        );

        assert!(report.errors.is_empty());
        assert_eq!(report.computer_name, "test-host");
        assert_eq!(report.disk.as_ref().unwrap().len(), 1);
        assert_eq!(report.cpu.as_ref().unwrap().load_percent, Some(42));
        assert_eq!(report.memory.as_ref().unwrap().used_percent, 75.0);
        assert_eq!(report.top_processes.as_ref().unwrap().len(), 3);
        assert!(report.network.internet_connected);
        assert_eq!(
            report.updates.pending_updates,
            PendingUpdates::Unavailable("unavailable".to_string())
        );
    }

    #[test]
    fn test_failed_probe_leaves_section_absent_and_records_error() {
        let mut outcomes = sample_outcomes();
        outcomes.memory = Err(anyhow!("sysinfo refresh failed"));
        outcomes.top_processes = Err(anyhow!("ps not found"));

        let report = HealthReport::assemble("test-host".to_string(), Utc::now(), outcomes);

        assert!(report.memory.is_none());
        assert!(report.top_processes.is_none());
        assert!(report.disk.is_some());
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].probe, "memory");
        assert!(report.errors[0].error.contains("sysinfo refresh failed"));
        assert_eq!(report.errors[1].probe, "topProcesses");
    }

    #[test]
    fn test_failed_sections_are_omitted_from_json() {
        let mut outcomes = sample_outcomes();
        outcomes.cpu = Err(anyhow!("no processors reported"));

        let report = HealthReport::assemble("test-host".to_string(), Utc::now(), outcomes);
        let json = serde_json::to_string(&report).unwrap();

        assert!(!json.contains("\"cpu\""));
        assert!(json.contains("\"errors\""));
        assert!(json.contains("\"computerName\":\"test-host\""));
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = HealthReport::assemble(
            "test-host".to_string(),
            "2024-01-02T03:04:05Z".parse().unwrap(),
            sample_outcomes(),
        );

        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: HealthReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_display_renders_every_section() {
        let report = HealthReport::assemble(
            "test-host".to_string(),
            Utc::now(),
            sample_outcomes(),
        );

        let rendered = report.to_string();
        assert!(rendered.contains("Disk Space:"));
        assert!(rendered.contains("/: 25.00 GB free of 100.00 GB (25.00% free)"));
        assert!(rendered.contains("CPU:"));
        assert!(rendered.contains("Test CPU - load 42%"));
        assert!(rendered.contains("Memory:"));
        assert!(rendered.contains("Top Processes by CPU Time:"));
        assert!(rendered.contains("kernel_task: 3600.0s CPU - 512.00 MB"));
        assert!(rendered.contains("Internet: connected"));
        assert!(rendered.contains("Pending: unavailable"));
        assert!(!rendered.contains("Probe Failures:"));
    }

    #[test]
    fn test_display_marks_failed_sections_unavailable() {
        let mut outcomes = sample_outcomes();
        outcomes.disk = Err(anyhow!("enumeration failed"));

        let report = HealthReport::assemble("test-host".to_string(), Utc::now(), outcomes);
        let rendered = report.to_string();

        assert!(rendered.contains("Disk Space:\n  unavailable"));
        assert!(rendered.contains("Probe Failures:"));
        assert!(rendered.contains("disk: enumeration failed"));
    }
}
