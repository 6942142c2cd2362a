//! In-memory transport for tests and demonstrations.
//!
//! [`ScriptedTransport`] replays a fixed sequence of attempt outcomes, one
//! per call, regardless of which issue is requested. It lets the retry and
//! aggregation logic be exercised without touching the network.
//!
//! # Examples
//!
//! ```
//! use triage_github::dummy::{ScriptedTransport, issue, rate_limited};
//! use triage_github::{IssueAggregator, RetryPolicy};
//! use triage_protocol::parse_identifiers;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> triage_github::Result<()> {
//! let transport = ScriptedTransport::new(vec![
//!     Err(rate_limited(0)),
//!     Ok(issue(42, "Crash on launch", &["Bug"])),
//! ]);
//! let aggregator = IssueAggregator::new(&transport, RetryPolicy::default());
//!
//! let identifiers = parse_identifiers("Issue\n42\n").unwrap();
//! let buckets = aggregator.aggregate(&identifiers).await?;
//! assert_eq!(buckets.bugs.len(), 1);
//! assert_eq!(transport.calls(), 2);
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use triage_protocol::{IssueRecord, IssueReference};

use crate::error::Error;
use crate::retry::FetchFailure;
use crate::transport::{FetchResult, IssueTransport};

/// A transport that replays scripted outcomes in order.
///
/// Once the script runs out, every further call fails with a 404 status.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<FetchResult>>,
    calls: AtomicUsize,
    requested: Mutex<Vec<u64>>,
}

impl ScriptedTransport {
    /// Creates a transport that returns `script` entries one per call.
    #[must_use]
    pub fn new(script: Vec<FetchResult>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Creates a transport that answers each issue successfully, in order.
    #[must_use]
    pub fn succeeding(records: Vec<IssueRecord>) -> Self {
        Self::new(records.into_iter().map(Ok).collect())
    }

    /// Returns how many fetch attempts have been made.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns the issue numbers requested, in call order.
    #[must_use]
    pub fn requested(&self) -> Vec<u64> {
        self.requested
            .lock()
            .map(|requested| requested.clone())
            .unwrap_or_default()
    }
}

impl IssueTransport for ScriptedTransport {
    async fn fetch_issue(&self, reference: &IssueReference) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(reference.number());
        }

        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());

        next.unwrap_or_else(|| {
            Err(FetchFailure::Other(Error::Status {
                status: 404,
                message: format!("no scripted response for issue {reference}"),
            }))
        })
    }
}

/// Builds an issue record with the given labels.
#[must_use]
pub fn issue(number: u64, title: &str, labels: &[&str]) -> IssueRecord {
    IssueRecord::new(
        number,
        title,
        labels.iter().map(|label| (*label).to_string()).collect(),
    )
}

/// Builds a quota-exhausted failure with the given delay.
#[must_use]
pub fn rate_limited(retry_after_secs: u64) -> FetchFailure {
    FetchFailure::RateLimited {
        retry_after: Duration::from_secs(retry_after_secs),
    }
}
