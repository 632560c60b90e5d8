use anyhow::{bail, Result};
use std::process::Command;

use super::types::ProcessRecord;

/// How many processes the report keeps
const TOP_PROCESS_COUNT: usize = 5;

/// Raw per-process numbers as enumerated from the process table
#[derive(Debug, Clone)]
pub struct ProcessStat {
    pub name: String,
    pub cpu_time_seconds: f64,
    pub resident_kb: u64,
}

/// Capability interface for process enumeration
pub trait ProcessSource {
    fn processes(&mut self) -> Result<Vec<ProcessStat>>;
}

/// Default backend that reads the process table via `ps`
pub struct PsProcessSource;

impl ProcessSource for PsProcessSource {
    fn processes(&mut self) -> Result<Vec<ProcessStat>> {
        let output = Command::new("ps")
            .args(["axo", "time=,rss=,comm="])
            .output()?;

        if !output.status.success() {
            bail!("ps exited with status {}", output.status);
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(parse_ps_output(&text))
    }
}

fn parse_ps_output(text: &str) -> Vec<ProcessStat> {
    text.lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                return None;
            }
            let cpu_time_seconds = parse_cpu_time(parts[0])?;
            let resident_kb = parts[1].parse::<u64>().ok()?;
            // Command names can contain spaces; everything after the
            // two numeric columns belongs to the name.
            let name = parts[2..].join(" ");

            Some(ProcessStat {
                name,
                cpu_time_seconds,
                resident_kb,
            })
        })
        .collect()
}

/// Parse a `ps` cumulative CPU time value of the form
/// `[[dd-]hh:]mm:ss` with an optional fractional seconds part.
fn parse_cpu_time(raw: &str) -> Option<f64> {
    let (days, clock) = match raw.split_once('-') {
        Some((days, clock)) => (days.parse::<f64>().ok()?, clock),
        None => (0.0, raw),
    };

    let mut seconds = 0.0;
    for field in clock.split(':') {
        seconds = seconds * 60.0 + field.parse::<f64>().ok()?;
    }

    Some(days * 86_400.0 + seconds)
}

pub struct ProcessCollector<S = PsProcessSource> {
    source: S,
}

impl ProcessCollector<PsProcessSource> {
    pub fn new() -> Self {
        Self {
            source: PsProcessSource,
        }
    }
}

impl<S: ProcessSource> ProcessCollector<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Collect the top 5 processes by cumulative CPU time, descending.
    /// Ties keep the enumeration order (stable sort).
    pub fn collect(&mut self) -> Result<Vec<ProcessRecord>> {
        let mut stats = self.source.processes()?;
        stats.sort_by(|a, b| b.cpu_time_seconds.total_cmp(&a.cpu_time_seconds));
        stats.truncate(TOP_PROCESS_COUNT);

        Ok(stats
            .into_iter()
            .map(|stat| ProcessRecord {
                name: stat.name,
                cpu_time_seconds: stat.cpu_time_seconds,
                memory_mb: round2(stat.resident_kb as f64 / 1024.0),
            })
            .collect())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
