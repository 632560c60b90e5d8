use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::types::NetworkStatus;

/// Capability interface for the reachability test
#[async_trait]
pub trait ConnectivitySource: Send + Sync {
    async fn reach(&self) -> Result<()>;
}

/// Default backend: one HEAD request against a well-known endpoint.
/// Any HTTP response counts as reachable; only a transport-level
/// failure means the internet is unreachable.
pub struct HttpConnectivitySource {
    client: Client,
    endpoint: String,
}

impl HttpConnectivitySource {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ConnectivitySource for HttpConnectivitySource {
    async fn reach(&self) -> Result<()> {
        self.client
            .head(&self.endpoint)
            .send()
            .await
            .with_context(|| format!("Reachability request to {} failed", self.endpoint))?;
        Ok(())
    }
}

pub struct NetworkCollector<S = HttpConnectivitySource> {
    source: S,
}

impl NetworkCollector<HttpConnectivitySource> {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            source: HttpConnectivitySource::new(endpoint, timeout)?,
        })
    }
}

impl<S: ConnectivitySource> NetworkCollector<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// A probe-level failure degrades to `internet_connected = false`
    /// instead of aborting the run.
    pub async fn collect(&self) -> NetworkStatus {
        let internet_connected = match self.source.reach().await {
            Ok(()) => true,
            Err(err) => {
                debug!("Reachability probe failed: {:#}", err);
                false
            }
        };

        NetworkStatus { internet_connected }
    }
}
