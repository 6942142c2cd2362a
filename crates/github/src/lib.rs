//! GitHub issue fetching and classification for triage.
//!
//! This crate fetches issues one at a time from a GitHub repository,
//! retries requests refused for rate limiting, and classifies the results
//! into label buckets.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`GitHubClient`]: The authenticated octocrab-backed API client
//! - [`IssueTransport`]: The one-attempt fetch seam, implemented by
//!   [`RepositoryIssues`] and by [`dummy::ScriptedTransport`] in tests
//! - [`RateLimitedTransport`]: Wraps a transport with retry/backoff
//! - [`RetryPolicy`], [`RetryDecision`] and [`FetchFailure`]: The retry decision
//! - [`IssueAggregator`]: Sequential fetch-and-classify over an identifier list
//! - [`Error`]: Error types for GitHub API operations
//!
//! # Rate Limiting
//!
//! GitHub refuses requests in two ways:
//!
//! - **Quota exhausted**: the primary rate limit. The request is retried once,
//!   after the delay the server indicates, by default.
//! - **Abuse detected**: the secondary rate limit. A warning is logged and the
//!   request fails without a retry.
//!
//! Tokens are handled using [`secrecy::SecretString`] to prevent accidental
//! logging of credentials.
//!
//! # Examples
//!
//! ```no_run
//! use secrecy::SecretString;
//! use triage_github::{GitHubClient, IssueAggregator, RetryPolicy};
//! use triage_protocol::read_identifiers;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let token = SecretString::from("ghp_your_token_here".to_string());
//! let client = GitHubClient::new(token).await?;
//!
//! let identifiers = read_identifiers("issues.csv")?;
//! let aggregator = IssueAggregator::new(client.repository("Expensify", "App"), RetryPolicy::default());
//! let buckets = aggregator.aggregate(&identifiers).await?;
//!
//! println!("{} bugs", buckets.bugs.len());
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod client;
pub mod dummy;
pub mod error;
pub mod retry;
pub mod transport;

pub use aggregate::IssueAggregator;
pub use client::{GitHubClient, RepositoryIssues};
pub use error::{Error, Result};
pub use retry::{FetchFailure, RetryDecision, RetryPolicy};
pub use transport::{FetchResult, IssueTransport, RateLimitedTransport};
