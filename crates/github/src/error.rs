//! Error types for GitHub API operations.
//!
//! This module defines the error types that can occur while fetching issues,
//! including rate limiting and abuse detection.

use std::time::Duration;

/// Errors that can occur during GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error occurred while calling the GitHub API.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The provided token was rejected before any request was made.
    #[error("token validation failed: {reason}")]
    TokenValidation {
        /// A description of why validation failed.
        reason: String,
    },

    /// The API answered with a non-success status.
    #[error("GitHub API returned {status}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The `message` field of the error body, or the raw body.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode issue payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rate limit exceeded and the retry budget is spent.
    #[error("rate limit exceeded{}", format_reset_time(*.reset_after))]
    RateLimited {
        /// Time until the rate limit resets, if known.
        reset_after: Option<Duration>,
    },

    /// GitHub flagged the request as abusive (secondary rate limit).
    ///
    /// These are never retried.
    #[error("abuse detected by GitHub (secondary rate limit), retry after {} seconds", .retry_after.as_secs())]
    AbuseDetected {
        /// The delay GitHub asked for.
        retry_after: Duration,
    },

    /// Fetching a specific issue failed.
    #[error("failed to fetch issue #{number}: {source}")]
    Issue {
        /// The issue number that failed.
        number: u64,
        /// The underlying error.
        #[source]
        source: Box<Error>,
    },

    /// There were no issues to fetch.
    #[error("no issue identifiers to fetch")]
    NoIssues,
}

/// Formats the reset time for the rate limit error message.
fn format_reset_time(reset_after: Option<Duration>) -> String {
    match reset_after {
        Some(duration) => format!(", resets in {} seconds", duration.as_secs()),
        None => String::new(),
    }
}

/// A specialized Result type for GitHub API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_rate_limited_with_reset() {
        let err = Error::RateLimited {
            reset_after: Some(Duration::from_secs(3600)),
        };
        assert_eq!(
            err.to_string(),
            "rate limit exceeded, resets in 3600 seconds"
        );
    }

    #[test]
    fn error_display_rate_limited_without_reset() {
        let err = Error::RateLimited { reset_after: None };
        assert_eq!(err.to_string(), "rate limit exceeded");
    }

    #[test]
    fn error_display_abuse_detected() {
        let err = Error::AbuseDetected {
            retry_after: Duration::from_secs(60),
        };
        assert_eq!(
            err.to_string(),
            "abuse detected by GitHub (secondary rate limit), retry after 60 seconds"
        );
    }

    #[test]
    fn error_display_status() {
        let err = Error::Status {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "GitHub API returned 404: Not Found");
    }

    #[test]
    fn error_display_issue_wraps_source() {
        let err = Error::Issue {
            number: 42,
            source: Box::new(Error::RateLimited { reset_after: None }),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch issue #42: rate limit exceeded"
        );
    }

    #[test]
    fn error_display_token_validation() {
        let err = Error::TokenValidation {
            reason: "token is empty".to_string(),
        };
        assert_eq!(err.to_string(), "token validation failed: token is empty");
    }
}
