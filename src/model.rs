// src/model.rs
// Core data types shared by the fetch, extraction and orchestration layers.
//
// Wire names matter: the aggregated payload is consumed by an external API,
// so serde renames reproduce the historical JSON shape exactly
// (`data`, `sectionId`, `name`, `touroperator`, `% к ЦБ`, `Δ, руб.`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Eur => write!(f, "EUR"),
            Currency::Usd => write!(f, "USD"),
        }
    }
}

/// One extracted exchange-rate row. Immutable once produced.
///
/// `rate = None` means the value was absent or did not parse; the record is
/// still kept because the ids and operator name remain meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRecord {
    pub id: u32,
    #[serde(rename = "sectionId")]
    pub section_id: u32,
    #[serde(rename = "name")]
    pub currency: Currency,
    #[serde(rename = "touroperator")]
    pub operator: String,
    pub rate: Option<String>,
    #[serde(rename = "% к ЦБ")]
    pub percent_to_reference: String,
    #[serde(rename = "Δ, руб.")]
    pub delta: String,
}

/// Tagged result of processing a single site job.
#[derive(Debug)]
pub enum JobOutcome {
    Success(Vec<RateRecord>),
    FetchFailed(String),
    ExtractFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_sites: usize,
    pub successful_sites: usize,
    pub failed_sites: usize,
    pub total_records: usize,
    pub errors: Vec<String>,
}

/// Aggregated output of one orchestration pass. Built incrementally by
/// `run_all` and returned once; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    #[serde(rename = "data")]
    pub records: Vec<RateRecord>,
    pub summary: RunSummary,
}

/// Job-scoped failures the orchestrator recovers from locally.
///
/// A value that fails to parse is *not* an error (the record is emitted with
/// `rate = None`), so only the two hard failure kinds live here.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("request for {url} failed after {attempts} attempts: {last_error}")]
    Fetch {
        url: String,
        attempts: u32,
        last_error: String,
    },
    #[error("required anchor `{anchor}` not found on {operator} page")]
    MissingAnchor { operator: String, anchor: String },
}
