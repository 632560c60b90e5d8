use anyhow::Result;
use log::warn;

use super::types::UpdateStatus;

/// Capability interface for the platform update facility
pub trait UpdateSource {
    fn pending_count(&mut self) -> Result<u32>;
}

/// Default backend that queries the platform package manager
pub struct PlatformUpdateSource;

impl UpdateSource for PlatformUpdateSource {
    fn pending_count(&mut self) -> Result<u32> {
        platform_pending_count()
    }
}

#[cfg(target_os = "linux")]
fn platform_pending_count() -> Result<u32> {
    use anyhow::{bail, Context};
    use std::process::Command;

    // apt first, dnf as fallback; both run in read-only/simulate mode
    if let Ok(output) = Command::new("apt-get").args(["-s", "-q", "upgrade"]).output() {
        if output.status.success() {
            return Ok(count_apt_upgrades(&String::from_utf8_lossy(&output.stdout)));
        }
    }

    let output = Command::new("dnf")
        .args(["check-update", "-q"])
        .output()
        .context("No usable update tool (tried apt-get, dnf)")?;

    match output.status.code() {
        // dnf exits 0 when nothing is pending and 100 when updates exist
        Some(0) => Ok(0),
        Some(100) => Ok(count_dnf_updates(&String::from_utf8_lossy(&output.stdout))),
        _ => bail!("dnf check-update failed with status {}", output.status),
    }
}

#[cfg(target_os = "macos")]
fn platform_pending_count() -> Result<u32> {
    use anyhow::bail;
    use std::process::Command;

    let output = Command::new("softwareupdate").arg("-l").output()?;
    if !output.status.success() {
        bail!("softwareupdate -l failed with status {}", output.status);
    }

    Ok(count_softwareupdate_labels(&String::from_utf8_lossy(
        &output.stdout,
    )))
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn platform_pending_count() -> Result<u32> {
    anyhow::bail!("No update facility backend for this platform")
}

#[cfg(any(target_os = "linux", test))]
fn count_apt_upgrades(stdout: &str) -> u32 {
    stdout
        .lines()
        .filter(|line| line.starts_with("Inst "))
        .count() as u32
}

#[cfg(any(target_os = "linux", test))]
fn count_dnf_updates(stdout: &str) -> u32 {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("Obsoleting"))
        .count() as u32
}

#[cfg(any(target_os = "macos", test))]
fn count_softwareupdate_labels(stdout: &str) -> u32 {
    stdout
        .lines()
        .filter(|line| line.trim_start().starts_with('*'))
        .count() as u32
}

pub struct UpdateCollector<S = PlatformUpdateSource> {
    source: S,
}

impl UpdateCollector<PlatformUpdateSource> {
    pub fn new() -> Self {
        Self {
            source: PlatformUpdateSource,
        }
    }
}

impl<S: UpdateSource> UpdateCollector<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// The one probe that recovers locally: any query failure becomes
    /// the "unavailable" sentinel instead of propagating.
    pub fn collect(&mut self) -> UpdateStatus {
        match self.source.pending_count() {
            Ok(count) => UpdateStatus::pending(count),
            Err(err) => {
                warn!("Update check unavailable: {:#}", err);
                UpdateStatus::unavailable()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::updates::types::PendingUpdates;
    use anyhow::anyhow;

    struct FakeUpdates(Result<u32>);

    impl UpdateSource for FakeUpdates {
        fn pending_count(&mut self) -> Result<u32> {
            match &self.0 {
                Ok(count) => Ok(*count),
                Err(err) => Err(anyhow!("{}", err)),
            }
        }
    }

    #[test]
    fn test_successful_query_reports_count() {
        let mut collector = UpdateCollector::with_source(FakeUpdates(Ok(7)));
        assert_eq!(collector.collect(), UpdateStatus::pending(7));
    }

    #[test]
    fn test_query_failure_reports_sentinel() {
        let mut collector =
            UpdateCollector::with_source(FakeUpdates(Err(anyhow!("permission denied"))));
        let status = collector.collect();
        assert_eq!(status, UpdateStatus::unavailable());
        assert!(matches!(
            status.pending_updates,
            PendingUpdates::Unavailable(_)
        ));
    }

    #[test]
    fn test_apt_upgrade_counting() {
        let stdout = "\
NOTE: This is only a simulation!
Inst libssl3 [3.0.2-0ubuntu1.18] (3.0.2-0ubuntu1.19 Ubuntu:22.04)
Conf libssl3 (3.0.2-0ubuntu1.19 Ubuntu:22.04)
Inst curl [7.81.0-1ubuntu1.15] (7.81.0-1ubuntu1.16 Ubuntu:22.04)
";
        assert_eq!(count_apt_upgrades(stdout), 2);
        assert_eq!(count_apt_upgrades(""), 0);
    }

    #[test]
    fn test_dnf_update_counting() {
        let stdout = "\
kernel.x86_64    5.14.0-503.el9    baseos

openssl.x86_64   3.0.7-28.el9      appstream
";
        assert_eq!(count_dnf_updates(stdout), 2);
    }

    #[test]
    fn test_softwareupdate_label_counting() {
        let stdout = "\
Software Update Tool

Finding available software
Software Update found the following new or updated software:
   * Label: macOS Sonoma 14.5-23F79
        Title: macOS Sonoma 14.5, Version: 14.5
   * Label: Safari17.5-17.5
        Title: Safari, Version: 17.5
";
        assert_eq!(count_softwareupdate_labels(stdout), 2);
    }
}
