//! Retry settings for rate-limited requests.
//!
//! GitHub signals an exhausted request quota with a 403 or 429 response and
//! tells the client how long to wait. These settings bound how many times a
//! single request may wait and retry, and how long to wait when the server
//! does not say.

/// Default number of retries after a quota-exhausted response.
pub const DEFAULT_RATE_LIMIT_RETRIES: u32 = 1;

/// Default delay when the server gives no retry hint (1 minute).
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Maximum allowed retries per request.
pub const MAX_RATE_LIMIT_RETRIES: u32 = 10;

/// Minimum allowed fallback delay (1 second).
pub const MIN_RETRY_AFTER_SECS: u64 = 1;

/// Maximum allowed fallback delay (1 hour).
pub const MAX_RETRY_AFTER_SECS: u64 = 3600;

/// Configuration for rate-limit retries.
///
/// # Examples
///
/// ```
/// use triage_config::RetryConfig;
///
/// let config = RetryConfig::default();
/// assert_eq!(config.rate_limit_retries, 1);
/// assert_eq!(config.default_retry_after_secs, 60);
///
/// let config = RetryConfig::with_retries(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// How many times one request may be retried after the quota is exhausted.
    ///
    /// Abuse-detection responses are never retried, whatever this is set to.
    pub rate_limit_retries: u32,

    /// Delay used when a rate-limit response carries no timing headers.
    pub default_retry_after_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            rate_limit_retries: DEFAULT_RATE_LIMIT_RETRIES,
            default_retry_after_secs: DEFAULT_RETRY_AFTER_SECS,
        }
    }
}

impl RetryConfig {
    /// Creates retry settings with the given retry count and the default delay.
    #[must_use]
    pub fn with_retries(rate_limit_retries: u32) -> Self {
        Self {
            rate_limit_retries,
            ..Self::default()
        }
    }

    /// Validates the retry settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the retry count or fallback delay is outside the
    /// allowed range.
    pub fn validate(&self) -> crate::Result<()> {
        if self.rate_limit_retries > MAX_RATE_LIMIT_RETRIES {
            return Err(crate::ConfigError::InvalidRetry {
                reason: format!(
                    "{} retries exceeds maximum of {}",
                    self.rate_limit_retries, MAX_RATE_LIMIT_RETRIES
                ),
            });
        }

        if !(MIN_RETRY_AFTER_SECS..=MAX_RETRY_AFTER_SECS).contains(&self.default_retry_after_secs)
        {
            return Err(crate::ConfigError::InvalidRetry {
                reason: format!(
                    "default delay {} is outside {}..={} seconds",
                    self.default_retry_after_secs, MIN_RETRY_AFTER_SECS, MAX_RETRY_AFTER_SECS
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RetryConfig::default();
        assert_eq!(config.rate_limit_retries, DEFAULT_RATE_LIMIT_RETRIES);
        assert_eq!(config.default_retry_after_secs, DEFAULT_RETRY_AFTER_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_retries_is_valid() {
        assert!(RetryConfig::with_retries(0).validate().is_ok());
    }

    #[test]
    fn validate_above_maximum_retries() {
        let config = RetryConfig::with_retries(MAX_RATE_LIMIT_RETRIES + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_delay_bounds() {
        let mut config = RetryConfig::default();

        config.default_retry_after_secs = 0;
        assert!(config.validate().is_err());

        config.default_retry_after_secs = MAX_RETRY_AFTER_SECS + 1;
        assert!(config.validate().is_err());

        config.default_retry_after_secs = MIN_RETRY_AFTER_SECS;
        assert!(config.validate().is_ok());

        config.default_retry_after_secs = MAX_RETRY_AFTER_SECS;
        assert!(config.validate().is_ok());
    }
}
