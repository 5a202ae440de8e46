// src/fetch.rs
//! Retry-governed page fetching.
//!
//! The fetcher knows nothing about page content: it returns the raw body as
//! a `String` and leaves parsing to the site adapters. Every attempt sends a
//! header set drawn from a small fixed pool so the crawl has no static
//! fingerprint, and a randomized courtesy pause follows each successful
//! fetch to space out requests against the partner sites.

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use rand::Rng;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

use crate::model::SiteError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.107 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Safari/605.1.15",
];

/// Retry/backoff/throttle knobs, consumed by [`with_retries`] and
/// [`HttpFetcher`]. One policy value instead of ad hoc sleeps per call site.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts per URL, including the first one.
    pub attempts: u32,
    /// Backoff grows linearly with the attempt index: `base_delay * (n + 1)`.
    pub base_delay: Duration,
    /// Random extra delay in `0..jitter` added to every backoff.
    pub jitter: Duration,
    /// Courtesy pause bounds applied after each successful fetch.
    pub courtesy_min: Duration,
    pub courtesy_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_secs(2),
            jitter: Duration::from_secs(3),
            courtesy_min: Duration::from_secs(1),
            courtesy_max: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    /// Policy with no sleeps at all, for tests.
    pub fn immediate(attempts: u32) -> Self {
        Self {
            attempts,
            base_delay: Duration::ZERO,
            jitter: Duration::ZERO,
            courtesy_min: Duration::ZERO,
            courtesy_max: Duration::ZERO,
        }
    }

    /// Delay to sleep after the failed attempt with index `attempt` (0-based).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let base = self.base_delay * (attempt + 1);
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return base;
        }
        base + Duration::from_millis(rand::rng().random_range(0..jitter_ms))
    }

    /// Randomized pause between outbound calls.
    pub fn courtesy_delay(&self) -> Duration {
        let lo = self.courtesy_min.as_millis() as u64;
        let hi = self.courtesy_max.as_millis() as u64;
        if hi <= lo {
            return self.courtesy_min;
        }
        Duration::from_millis(rand::rng().random_range(lo..=hi))
    }
}

/// Run `op` up to `policy.attempts` times, sleeping a policy-governed backoff
/// between failures. Exhaustion becomes a `SiteError::Fetch` value; nothing
/// is raised past this boundary.
pub async fn with_retries<T, F, Fut>(
    policy: &RetryPolicy,
    url: &str,
    mut op: F,
) -> Result<T, SiteError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let mut last_error = String::new();
    for attempt in 0..policy.attempts {
        match op().await {
            Ok(v) => return Ok(v),
            Err(e) => {
                last_error = format!("{e:#}");
                warn!(url, attempt = attempt + 1, error = %last_error, "fetch attempt failed");
                if attempt + 1 < policy.attempts {
                    tokio::time::sleep(policy.backoff_delay(attempt)).await;
                }
            }
        }
    }
    Err(SiteError::Fetch {
        url: url.to_string(),
        attempts: policy.attempts,
        last_error,
    })
}

/// Seam between the orchestrator and the network, so tests can drive a run
/// with canned documents.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, SiteError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl HttpFetcher {
    pub fn new(policy: RetryPolicy) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("building HTTP client")?;
        Ok(Self { client, policy })
    }
}

/// Header set for one attempt: random user-agent from the pool plus the
/// fixed browser-like headers the sites expect.
fn random_headers() -> HeaderMap {
    let ua = USER_AGENTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(USER_AGENTS[0]);

    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(ua));
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("ru-RU,ru;q=0.8,en-US;q=0.5,en;q=0.3"),
    );
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(
        HeaderName::from_static("dnt"),
        HeaderValue::from_static("1"),
    );
    headers.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        HeaderValue::from_static("1"),
    );
    headers
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, SiteError> {
        let body = with_retries(&self.policy, url, || {
            let client = self.client.clone();
            let url = url.to_string();
            async move {
                let resp = client
                    .get(&url)
                    .headers(random_headers())
                    .send()
                    .await
                    .context("request failed")?
                    .error_for_status()
                    .context("non-success status")?;
                resp.text().await.context("reading body")
            }
        })
        .await?;

        debug!(url, bytes = body.len(), "fetched page");

        // Throttle before the orchestrator moves on to the next site.
        let pause = self.policy.courtesy_delay();
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn backoff_grows_with_attempt_index() {
        let policy = RetryPolicy {
            jitter: Duration::ZERO,
            ..RetryPolicy::default()
        };
        assert_eq!(policy.backoff_delay(0), Duration::from_secs(2));
        assert_eq!(policy.backoff_delay(1), Duration::from_secs(4));
        assert_eq!(policy.backoff_delay(2), Duration::from_secs(6));
    }

    #[test]
    fn jittered_backoff_stays_within_bounds() {
        let policy = RetryPolicy::default();
        for attempt in 0..3u32 {
            let d = policy.backoff_delay(attempt);
            let base = policy.base_delay * (attempt + 1);
            assert!(d >= base);
            assert!(d < base + policy.jitter);
        }
    }

    #[test]
    fn courtesy_delay_is_within_range() {
        let policy = RetryPolicy::default();
        for _ in 0..32 {
            let d = policy.courtesy_delay();
            assert!(d >= policy.courtesy_min && d <= policy.courtesy_max);
        }
    }

    #[tokio::test]
    async fn retry_helper_recovers_from_transient_failures() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::immediate(3);
        let out = with_retries(&policy, "http://example.test/", || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    anyhow::bail!("boom {n}")
                } else {
                    Ok("ok")
                }
            }
        })
        .await;
        assert_eq!(out.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn retry_helper_reports_exhaustion() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::immediate(3);
        let out: Result<(), _> = with_retries(&policy, "http://example.test/", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { anyhow::bail!("always down") }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        match out.unwrap_err() {
            SiteError::Fetch {
                url,
                attempts,
                last_error,
            } => {
                assert_eq!(url, "http://example.test/");
                assert_eq!(attempts, 3);
                assert!(last_error.contains("always down"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn header_pool_produces_known_user_agents() {
        for _ in 0..16 {
            let headers = random_headers();
            let ua = headers.get(header::USER_AGENT).unwrap().to_str().unwrap();
            assert!(USER_AGENTS.contains(&ua));
            assert!(headers.contains_key(header::ACCEPT_LANGUAGE));
        }
    }
}
