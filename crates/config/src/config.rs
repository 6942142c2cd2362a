//! Core configuration struct and loading logic.
//!
//! Configuration is read from `TRIAGE_*` environment variables only; every
//! setting has a built-in default.

use std::str::FromStr;

use crate::error::{ConfigError, Result};
use crate::repository::Repository;
use crate::retry::RetryConfig;

/// Environment variable naming the target `owner/repo`.
pub const ENV_REPOSITORY: &str = "TRIAGE_REPOSITORY";

/// Environment variable overriding the number of rate-limit retries.
pub const ENV_RATE_LIMIT_RETRIES: &str = "TRIAGE_RATE_LIMIT_RETRIES";

/// Environment variable overriding the fallback retry delay.
pub const ENV_DEFAULT_RETRY_AFTER_SECS: &str = "TRIAGE_DEFAULT_RETRY_AFTER_SECS";

/// Environment variable overriding the API base URL (GitHub Enterprise).
pub const ENV_API_URL: &str = "TRIAGE_API_URL";

/// The main configuration struct for triage.
///
/// # Examples
///
/// ```
/// use triage_config::{Config, Repository};
///
/// let config = Config::from_lookup(|name| match name {
///     "TRIAGE_REPOSITORY" => Some("rust-lang/rust".to_string()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(config.repository, Repository::new("rust-lang", "rust"));
/// assert_eq!(config.retry.rate_limit_retries, 1);
/// assert!(config.api_url.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Repository whose issues are fetched.
    pub repository: Repository,

    /// Rate-limit retry settings.
    pub retry: RetryConfig,

    /// API base URL, if not the public `api.github.com`.
    pub api_url: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration using `lookup` to resolve variable names.
    ///
    /// Variables that are unset or blank keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed, or if the resulting
    /// configuration fails validation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(value) = var(ENV_REPOSITORY) {
            config.repository = Repository::parse_short(&value)?;
        }

        if let Some(value) = var(ENV_RATE_LIMIT_RETRIES) {
            config.retry.rate_limit_retries = parse_number(ENV_RATE_LIMIT_RETRIES, &value)?;
        }

        if let Some(value) = var(ENV_DEFAULT_RETRY_AFTER_SECS) {
            config.retry.default_retry_after_secs =
                parse_number(ENV_DEFAULT_RETRY_AFTER_SECS, &value)?;
        }

        config.api_url = var(ENV_API_URL);

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<()> {
        self.retry.validate()?;
        Ok(())
    }
}

fn parse_number<T>(name: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidVariable {
            name,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
