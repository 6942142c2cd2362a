//! Configuration management for triage.
//!
//! triage takes no configuration file and no flags. Everything beyond the
//! two positional arguments comes from environment variables, each with a
//! built-in default.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and environment loading
//! - [`repository`]: The target `owner/repo`
//! - [`retry`]: Rate-limit retry settings
//! - [`error`]: Error types for configuration operations
//!
//! # Environment Variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TRIAGE_REPOSITORY` | `Expensify/App` |
//! | `TRIAGE_RATE_LIMIT_RETRIES` | `1` |
//! | `TRIAGE_DEFAULT_RETRY_AFTER_SECS` | `60` |
//! | `TRIAGE_API_URL` | public GitHub API |
//!
//! # Examples
//!
//! ```no_run
//! use triage_config::Config;
//!
//! # fn example() -> triage_config::Result<()> {
//! let config = Config::from_env()?;
//! println!("Fetching issues from {}", config.repository);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod repository;
pub mod retry;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use repository::Repository;
pub use retry::RetryConfig;
