//! Error types for configuration operations.
//!
//! This module defines the error types that can occur while reading and
//! validating configuration from the environment.

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid repository format.
    #[error("invalid repository format: {0}")]
    InvalidRepository(String),

    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {name}: '{value}' ({reason})")]
    InvalidVariable {
        /// The environment variable name.
        name: &'static str,
        /// The raw value found.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Invalid retry settings.
    #[error("invalid retry settings: {reason}")]
    InvalidRetry {
        /// The reason the settings are invalid.
        reason: String,
    },
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_variable() {
        let err = ConfigError::InvalidVariable {
            name: "TRIAGE_RATE_LIMIT_RETRIES",
            value: "many".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for TRIAGE_RATE_LIMIT_RETRIES: 'many' (invalid digit found in string)"
        );
    }

    #[test]
    fn error_display_invalid_repository() {
        let err = ConfigError::InvalidRepository("expected 'owner/repo'".to_string());
        assert_eq!(
            err.to_string(),
            "invalid repository format: expected 'owner/repo'"
        );
    }
}
