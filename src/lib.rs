// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod extract;
pub mod fetch;
pub mod handler;
pub mod model;
pub mod notify;
pub mod run;
pub mod sink;
pub mod sites;

// ---- Re-exports for stable public API ----
pub use crate::extract::extract_rate;
pub use crate::fetch::{HttpFetcher, PageFetcher, RetryPolicy};
pub use crate::handler::{handler, HandlerResponse};
pub use crate::model::{Currency, JobOutcome, RateRecord, RunResult, RunSummary, SiteError};
pub use crate::run::run_all;
pub use crate::sites::{SiteDescriptor, SiteJob};
