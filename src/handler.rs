// src/handler.rs
//! Process entry point: one invocation performs one full scrape run.
//!
//! Contract: missing configuration or an error escaping the run produce
//! status 500 with a JSON error body; a degraded run (some sites failed)
//! is still status 200 with the failures enumerated in `summary.errors`.

use std::time::Instant;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::fetch::{HttpFetcher, RetryPolicy};
use crate::notify::{render_critical, render_report, EmailNotifier};
use crate::run::run_all;
use crate::sink::ApiSink;
use crate::sites::catalog;

#[derive(Debug, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded body, mirroring the cloud-function response shape.
    pub body: String,
}

impl HandlerResponse {
    fn server_error(message: &str) -> Self {
        Self {
            status_code: 500,
            body: json!({ "error": message }).to_string(),
        }
    }
}

pub async fn handler(_event: Value) -> HandlerResponse {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Short-circuit before any network activity.
            error!(error = %e, "configuration incomplete");
            return HandlerResponse::server_error(&e.to_string());
        }
    };

    match run(&cfg).await {
        Ok(body) => HandlerResponse {
            status_code: 200,
            body,
        },
        Err(e) => {
            let msg = format!("critical error: {e:#}");
            error!(error = %msg, "run failed");
            send_critical_alert(&cfg, &msg).await;
            HandlerResponse::server_error(&msg)
        }
    }
}

async fn run(cfg: &AppConfig) -> anyhow::Result<String> {
    let started = Instant::now();

    info!("starting currency rates run");
    let fetcher = HttpFetcher::new(RetryPolicy::default())?;
    let result = run_all(&fetcher, catalog::JOBS).await;

    let api_sent = ApiSink::new(cfg.api_url.clone())?.send(&result).await;
    let execution_secs = started.elapsed().as_secs_f64();

    let summary = &result.summary;
    info!(
        total = summary.total_sites,
        successful = summary.successful_sites,
        failed = summary.failed_sites,
        records = summary.total_records,
        api_sent,
        "run finished"
    );

    // Report by email when anything went wrong; its own failure only logs.
    if summary.failed_sites > 0 || !summary.errors.is_empty() || !api_sent {
        let subject = format!(
            "⚠️ Currency rates scrape issues - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M")
        );
        let body = render_report(summary, execution_secs, api_sent);
        match EmailNotifier::from_config(cfg) {
            Ok(notifier) => {
                if let Err(e) = notifier.send(&subject, &body).await {
                    warn!(error = %e, "report email failed");
                }
            }
            Err(e) => warn!(error = %e, "notifier unavailable"),
        }
    }

    Ok(serde_json::to_string(&json!({
        "message": "scrape completed",
        "summary": summary,
        "execution_time": execution_secs,
        "api_sent": api_sent,
    }))?)
}

/// Best-effort alert for run-scoped fatals; every failure here is swallowed.
async fn send_critical_alert(cfg: &AppConfig, message: &str) {
    let subject = format!(
        "🚨 Currency rates scrape critical error - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    match EmailNotifier::from_config(cfg) {
        Ok(notifier) => {
            if let Err(e) = notifier.send(&subject, &render_critical(message)).await {
                warn!(error = %e, "critical alert email failed");
            }
        }
        Err(e) => warn!(error = %e, "notifier unavailable for critical alert"),
    }
}
