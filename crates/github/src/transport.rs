//! Issue transports and the rate-limit wrapper.
//!
//! [`IssueTransport`] is the seam between the aggregator and the network: one
//! call, one attempt. [`RateLimitedTransport`] wraps any transport with the
//! throttle/backoff behaviour of a [`RetryPolicy`].
//!
//! Per request the wrapper moves through:
//!
//! ```text
//! Pending ──ok──────────────────────────────▶ Done
//!    │
//!    ├─rate limited, attempt ≤ max──▶ Retrying ──sleep──▶ Pending
//!    ├─rate limited, attempt > max──▶ Failed
//!    ├─abuse detected───────────────▶ Failed
//!    └─other error──────────────────▶ Failed
//! ```

use std::future::Future;

use tracing::{info, warn};
use triage_protocol::{IssueRecord, IssueReference};

use crate::error::Result;
use crate::retry::{FetchFailure, RetryDecision, RetryPolicy};

/// The outcome of a single fetch attempt.
pub type FetchResult = std::result::Result<IssueRecord, FetchFailure>;

/// Something that can fetch one issue in one attempt.
pub trait IssueTransport {
    /// Fetches the issue named by `reference`.
    ///
    /// Implementations must not retry; failures are reported as
    /// [`FetchFailure`] so the caller can apply its retry policy.
    fn fetch_issue(&self, reference: &IssueReference) -> impl Future<Output = FetchResult> + Send;
}

impl<T: IssueTransport + Sync> IssueTransport for &T {
    fn fetch_issue(&self, reference: &IssueReference) -> impl Future<Output = FetchResult> + Send {
        (**self).fetch_issue(reference)
    }
}

/// Wraps a transport with rate-limit retries.
#[derive(Debug)]
pub struct RateLimitedTransport<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: IssueTransport> RateLimitedTransport<T> {
    /// Wraps `inner` using `policy` to decide on retries.
    #[must_use]
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// Fetches an issue, retrying after rate limiting as the policy allows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RateLimited`](crate::Error::RateLimited) once the
    /// retry budget is spent, [`Error::AbuseDetected`](crate::Error::AbuseDetected)
    /// on abuse detection, or the underlying error for anything else.
    pub async fn fetch(&self, reference: &IssueReference) -> Result<IssueRecord> {
        let mut rate_limit_hits = 0;

        loop {
            let failure = match self.inner.fetch_issue(reference).await {
                Ok(record) => return Ok(record),
                Err(failure) => failure,
            };

            match &failure {
                FetchFailure::RateLimited { .. } => {
                    rate_limit_hits += 1;
                    warn!(issue = %reference, attempt = rate_limit_hits, "request quota exhausted");
                }
                FetchFailure::AbuseDetected { retry_after } => {
                    warn!(
                        issue = %reference,
                        retry_after_secs = retry_after.as_secs(),
                        "abuse detected, not retrying"
                    );
                }
                FetchFailure::Other(_) => {}
            }

            match self.policy.decide(rate_limit_hits, &failure) {
                RetryDecision::Retry(delay) => {
                    info!(issue = %reference, "retrying after {} seconds", delay.as_secs());
                    tokio::time::sleep(delay).await;
                }
                RetryDecision::GiveUp => return Err(failure.into_error()),
            }
        }
    }
}
