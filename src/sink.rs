// src/sink.rs
//! API sink: hands the aggregated result to the downstream consumer.
//! Failures are logged, never retried, and never affect the run's own
//! success reporting.

use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};

use crate::model::RunResult;

pub struct ApiSink {
    client: reqwest::Client,
    endpoint: String,
}

impl ApiSink {
    pub fn new(endpoint: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("building API client")?;
        Ok(Self { client, endpoint })
    }

    /// POST the result as JSON. Returns whether the consumer accepted it.
    pub async fn send(&self, result: &RunResult) -> bool {
        info!(
            endpoint = %self.endpoint,
            records = result.summary.total_records,
            "sending results to API"
        );
        match self
            .client
            .post(&self.endpoint)
            .json(result)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) => {
                warn!(status = %resp.status(), "API rejected results");
                false
            }
            Err(e) => {
                warn!(error = %e, "sending results to API failed");
                false
            }
        }
    }
}
