// src/run.rs
//! Orchestration: drive the static job list sequentially and fold every
//! per-job outcome into one `RunResult`.
//!
//! Jobs never run concurrently; the courtesy delays in the fetcher throttle
//! the whole crawl. A failed job contributes one error string and nothing
//! else; it never aborts the run or discards records already collected.

use scraper::Html;
use tracing::{info, warn};

use crate::fetch::PageFetcher;
use crate::model::{JobOutcome, RunResult, RunSummary};
use crate::sites::SiteJob;

/// Process every job and return the aggregated result. The summary counters
/// always satisfy `successful_sites + failed_sites == total_sites` and
/// `total_records == records.len()`.
pub async fn run_all(fetcher: &dyn PageFetcher, jobs: &[SiteJob]) -> RunResult {
    let mut records = Vec::new();
    let mut errors = Vec::new();
    let mut successful_sites = 0usize;

    for job in jobs {
        info!(site = job.name, url = job.url, "processing site");
        match process_job(fetcher, job).await {
            JobOutcome::Success(mut recs) => {
                info!(site = job.name, records = recs.len(), "site processed");
                successful_sites += 1;
                records.append(&mut recs);
            }
            JobOutcome::FetchFailed(msg) | JobOutcome::ExtractFailed(msg) => {
                warn!(site = job.name, error = %msg, "site failed");
                errors.push(msg);
            }
        }
    }

    let summary = RunSummary {
        total_sites: jobs.len(),
        successful_sites,
        failed_sites: jobs.len() - successful_sites,
        total_records: records.len(),
        errors,
    };
    RunResult { records, summary }
}

async fn process_job(fetcher: &dyn PageFetcher, job: &SiteJob) -> JobOutcome {
    let body = match fetcher.fetch(job.url).await {
        Ok(body) => body,
        Err(e) => {
            return JobOutcome::FetchFailed(format!("failed to fetch {} data: {e}", job.name))
        }
    };

    // Parse and extract synchronously; the document never crosses an await.
    let extracted = {
        let doc = Html::parse_document(&body);
        job.descriptor.extract(&doc)
    };

    match extracted {
        Ok(recs) => JobOutcome::Success(recs),
        Err(e) => JobOutcome::ExtractFailed(format!("extraction failed for {}: {e}", job.name)),
    }
}
