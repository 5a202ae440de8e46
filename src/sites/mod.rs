// src/sites/mod.rs
//! Per-site extraction, expressed as data.
//!
//! The ~20 partner sites differ only in their structural anchors and the
//! fixed record metadata, so each one is a declarative [`SiteDescriptor`]
//! dispatched over two behavioral strategies: single/multi-anchor lookup
//! ([`anchor`]) and the one aggregate rate table with fuzzy operator
//! matching ([`table`]).

pub mod anchor;
pub mod catalog;
pub mod table;

use scraper::{Html, Selector};

use crate::model::{RateRecord, SiteError};

/// Fixed per-currency record identity, independent of page content.
#[derive(Debug, Clone, Copy)]
pub struct RecordMeta {
    pub id: u32,
    pub section_id: u32,
}

/// One currency's documented anchor on a page.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyAnchor {
    pub selector: &'static str,
    /// Secondary anchor consulted when the primary element is absent
    /// (TEZ Tour publishes tomorrow's rate in a row that only appears late
    /// in the day; the today row is the fallback).
    pub fallback: Option<&'static str>,
    pub meta: RecordMeta,
}

impl CurrencyAnchor {
    pub const fn plain(selector: &'static str, id: u32, section_id: u32) -> Self {
        Self {
            selector,
            fallback: None,
            meta: RecordMeta { id, section_id },
        }
    }

    pub const fn with_fallback(
        selector: &'static str,
        fallback: &'static str,
        id: u32,
        section_id: u32,
    ) -> Self {
        Self {
            selector,
            fallback: Some(fallback),
            meta: RecordMeta { id, section_id },
        }
    }
}

/// Anchor-lookup strategy: a guard element plus one anchor per currency.
#[derive(Debug, Clone, Copy)]
pub struct AnchorSpec {
    /// Landmark whose presence means the page can be trusted.
    pub guard: &'static str,
    /// When `true`, a missing guard is a structural failure (layout changed
    /// or the request was served a block page). When `false` the site is
    /// informational and a missing guard yields zero records.
    pub guard_required: bool,
    pub eur: CurrencyAnchor,
    pub usd: CurrencyAnchor,
}

/// Metadata for one operator row in the aggregate rate table.
#[derive(Debug, Clone, Copy)]
pub struct OperatorRow {
    pub operator: &'static str,
    pub eur: RecordMeta,
    pub usd: RecordMeta,
}

/// Table-scan strategy: every row's label is matched against the target
/// operator names by three-way containment.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub table: &'static str,
    pub label_cell: &'static str,
    pub operators: &'static [OperatorRow],
}

#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    Anchor(AnchorSpec),
    Table(TableSpec),
}

/// Everything the orchestrator needs to know about one site's markup.
#[derive(Debug, Clone, Copy)]
pub struct SiteDescriptor {
    pub operator: &'static str,
    pub strategy: Strategy,
}

impl SiteDescriptor {
    /// Produce all rate records this site publishes.
    pub fn extract(&self, doc: &Html) -> Result<Vec<RateRecord>, SiteError> {
        match &self.strategy {
            Strategy::Anchor(spec) => anchor::extract(doc, self.operator, spec),
            Strategy::Table(spec) => table::extract(doc, spec),
        }
    }
}

/// A site job: fixed name, URL and descriptor, defined at startup.
#[derive(Debug, Clone, Copy)]
pub struct SiteJob {
    pub name: &'static str,
    pub url: &'static str,
    pub descriptor: SiteDescriptor,
}

/// Parse a catalog selector. All selectors are static and validated by the
/// catalog test, so a parse failure here is a programming error.
pub(crate) fn sel(selector: &'static str) -> Selector {
    Selector::parse(selector).expect("invalid static selector")
}

/// Collected text of the first element matching `selector`, if any.
pub(crate) fn text_of(doc: &Html, selector: &'static str) -> Option<String> {
    doc.select(&sel(selector))
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
