use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use super::HealthReport;

/// File name for a report taken at the given instant, e.g.
/// `SystemHealthCheck_20240102_030405.json`
pub fn report_filename(timestamp: DateTime<Utc>) -> String {
    format!("SystemHealthCheck_{}.json", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Serialize the report as pretty-printed JSON and write it into
/// `output_dir`. Returns the full path of the written file.
pub fn write_report(report: &HealthReport, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(report_filename(report.timestamp));

    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;

    fs::write(&path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(path)
}
