// src/sites/anchor.rs
//! Single/multi-anchor lookup, the strategy covering most sites.

use scraper::Html;

use super::{sel, text_of, AnchorSpec, CurrencyAnchor};
use crate::extract::extract_rate;
use crate::model::{Currency, RateRecord, SiteError};

pub fn extract(
    doc: &Html,
    operator: &str,
    spec: &AnchorSpec,
) -> Result<Vec<RateRecord>, SiteError> {
    if doc.select(&sel(spec.guard)).next().is_none() {
        if spec.guard_required {
            return Err(SiteError::MissingAnchor {
                operator: operator.to_string(),
                anchor: spec.guard.to_string(),
            });
        }
        // Informational site: the currency block is simply not on this page.
        tracing::debug!(operator, guard = spec.guard, "guard absent, no records");
        return Ok(Vec::new());
    }

    Ok(vec![
        currency_record(doc, operator, Currency::Eur, &spec.eur),
        currency_record(doc, operator, Currency::Usd, &spec.usd),
    ])
}

/// Each currency's record is populated from its own documented anchor.
/// An absent or unparsable value keeps the record with `rate = None`.
fn currency_record(
    doc: &Html,
    operator: &str,
    currency: Currency,
    anchor: &CurrencyAnchor,
) -> RateRecord {
    let text = text_of(doc, anchor.selector)
        .or_else(|| anchor.fallback.and_then(|f| text_of(doc, f)));

    let rate = text.as_deref().and_then(extract_rate);
    if rate.is_none() {
        tracing::debug!(operator, %currency, selector = anchor.selector, "no parsable rate");
    }

    RateRecord {
        id: anchor.meta.id,
        section_id: anchor.meta.section_id,
        currency,
        operator: operator.to_string(),
        rate,
        percent_to_reference: String::new(),
        delta: String::new(),
    }
}
