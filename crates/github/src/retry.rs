//! Retry decisions for rate-limited requests.
//!
//! A single fetch attempt either succeeds or fails with a [`FetchFailure`].
//! [`RetryPolicy::decide`] turns a failure and the number of rate-limit
//! signals seen so far into a [`RetryDecision`].
//!
//! | Failure | Decision |
//! |---------|----------|
//! | `RateLimited`, attempt ≤ max | `Retry(retry_after)` |
//! | `RateLimited`, attempt > max | `GiveUp` |
//! | `AbuseDetected` | `GiveUp` |
//! | `Other` | `GiveUp` |
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use triage_github::{FetchFailure, RetryDecision, RetryPolicy};
//!
//! let policy = RetryPolicy::default();
//! let failure = FetchFailure::RateLimited {
//!     retry_after: Duration::from_secs(30),
//! };
//!
//! assert_eq!(policy.decide(1, &failure), RetryDecision::Retry(Duration::from_secs(30)));
//! assert_eq!(policy.decide(2, &failure), RetryDecision::GiveUp);
//! ```

use std::time::Duration;

use triage_config::RetryConfig;

use crate::error::Error;

/// Why a single fetch attempt failed.
#[derive(Debug)]
pub enum FetchFailure {
    /// The request quota is exhausted; the server asked us to wait.
    RateLimited {
        /// How long the server asked us to wait.
        retry_after: Duration,
    },
    /// The request tripped GitHub's abuse detection.
    AbuseDetected {
        /// How long the server asked us to wait.
        retry_after: Duration,
    },
    /// Any other failure; never retried.
    Other(Error),
}

impl FetchFailure {
    /// Converts the failure into the error surfaced once retries stop.
    #[must_use]
    pub fn into_error(self) -> Error {
        match self {
            Self::RateLimited { retry_after } => Error::RateLimited {
                reset_after: Some(retry_after),
            },
            Self::AbuseDetected { retry_after } => Error::AbuseDetected { retry_after },
            Self::Other(err) => err,
        }
    }
}

impl From<Error> for FetchFailure {
    fn from(err: Error) -> Self {
        Self::Other(err)
    }
}

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Wait for the given delay, then send the request again.
    Retry(Duration),
    /// Stop and surface the failure.
    GiveUp,
}

/// Bounds how many times one request is retried after rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_rate_limit_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.rate_limit_retries)
    }
}

impl RetryPolicy {
    /// Creates a policy that retries a rate-limited request up to
    /// `max_rate_limit_retries` times.
    #[must_use]
    pub const fn new(max_rate_limit_retries: u32) -> Self {
        Self {
            max_rate_limit_retries,
        }
    }

    /// Returns a policy that never retries.
    #[must_use]
    pub const fn no_retries() -> Self {
        Self::new(0)
    }

    /// Returns the maximum number of rate-limit retries per request.
    #[must_use]
    pub const fn max_rate_limit_retries(&self) -> u32 {
        self.max_rate_limit_retries
    }

    /// Decides whether to retry after `failure`.
    ///
    /// `attempt` is the 1-based count of rate-limit signals received for the
    /// current request, including this one. It is ignored for other failures.
    #[must_use]
    pub fn decide(&self, attempt: u32, failure: &FetchFailure) -> RetryDecision {
        match failure {
            FetchFailure::RateLimited { retry_after } if attempt <= self.max_rate_limit_retries => {
                RetryDecision::Retry(*retry_after)
            }
            FetchFailure::RateLimited { .. }
            | FetchFailure::AbuseDetected { .. }
            | FetchFailure::Other(_) => RetryDecision::GiveUp,
        }
    }
}
