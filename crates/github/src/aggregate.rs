//! Sequential fetch-and-classify over a list of issue identifiers.
//!
//! [`IssueAggregator`] fetches each issue in input order, one request at a
//! time, and folds the records into [`Buckets`]. A failure that survives the
//! retry policy aborts the whole run; no partial buckets are returned.

use tracing::{debug, info, instrument};
use triage_protocol::{Buckets, IssueReference};

use crate::error::{Error, Result};
use crate::retry::RetryPolicy;
use crate::transport::{IssueTransport, RateLimitedTransport};

/// Fetches issues and classifies them by label.
#[derive(Debug)]
pub struct IssueAggregator<T> {
    transport: RateLimitedTransport<T>,
}

impl<T: IssueTransport> IssueAggregator<T> {
    /// Creates an aggregator over `transport`, retrying per `policy`.
    #[must_use]
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self {
            transport: RateLimitedTransport::new(transport, policy),
        }
    }

    /// Fetches every identifier in order and returns the classified buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoIssues`] if `identifiers` is empty, or
    /// [`Error::Issue`] naming the first issue whose fetch failed.
    #[instrument(skip_all, fields(count = identifiers.len()))]
    pub async fn aggregate(&self, identifiers: &[IssueReference]) -> Result<Buckets> {
        if identifiers.is_empty() {
            return Err(Error::NoIssues);
        }

        let mut records = Vec::with_capacity(identifiers.len());
        for reference in identifiers {
            debug!(issue = %reference, "fetching issue");
            let record =
                self.transport
                    .fetch(reference)
                    .await
                    .map_err(|source| Error::Issue {
                        number: reference.number(),
                        source: Box::new(source),
                    })?;
            debug!(issue = %reference, labels = ?record.labels, "fetched issue");
            records.push(record);
        }

        let buckets = Buckets::from_records(records);
        info!(
            bugs = buckets.bugs.len(),
            new_features = buckets.new_features.len(),
            other = buckets.other.len(),
            "classified issues"
        );
        Ok(buckets)
    }
}
