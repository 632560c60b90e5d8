mod probes;
mod report;

use anyhow::Result;
use dotenv::dotenv;
use log::{error, info};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use probes::network::types::NetworkStatus;
use probes::{
    CpuCollector, DiskCollector, MemoryCollector, NetworkCollector, ProcessCollector,
    UpdateCollector,
};
use report::writer::write_report;
use report::{HealthReport, ProbeOutcomes};

const DEFAULT_CONNECTIVITY_URL: &str = "https://www.google.com/generate_204";

fn print_separator() {
    println!("\n{}\n", "-".repeat(80));
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv().ok();

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let output_dir = PathBuf::from(
        env::var("HEALTHCHECK_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
    );
    let connectivity_url = env::var("HEALTHCHECK_CONNECTIVITY_URL")
        .unwrap_or_else(|_| DEFAULT_CONNECTIVITY_URL.to_string());
    let http_timeout = Duration::from_secs(
        env::var("HEALTHCHECK_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10),
    );

    let computer_name = hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "unknown-host".to_string());
    let timestamp = Utc::now();

    info!("Starting health check on {}", computer_name);

    let disk = DiskCollector::new().collect();
    if let Err(err) = &disk {
        error!("Disk probe failed: {:#}", err);
    }

    let cpu = CpuCollector::new().collect();
    if let Err(err) = &cpu {
        error!("CPU probe failed: {:#}", err);
    }

    let memory = MemoryCollector::new().collect();
    if let Err(err) = &memory {
        error!("Memory probe failed: {:#}", err);
    }

    let top_processes = ProcessCollector::new().collect();
    if let Err(err) = &top_processes {
        error!("Process probe failed: {:#}", err);
    }

    let network = match NetworkCollector::new(connectivity_url, http_timeout) {
        Ok(collector) => collector.collect().await,
        Err(err) => {
            error!("Network probe could not start: {:#}", err);
            NetworkStatus {
                internet_connected: false,
            }
        }
    };

    let updates = UpdateCollector::new().collect();

    let report = HealthReport::assemble(
        computer_name,
        timestamp,
        ProbeOutcomes {
            disk,
            cpu,
            memory,
            top_processes,
            network,
            updates,
        },
    );

    let path = write_report(&report, &output_dir)?;
    info!("Report written to {}", path.display());

    print_separator();
    println!("{}", report);

    Ok(())
}
