//! Target repository configuration.
//!
//! The repository is given in the short `"owner/repo"` form.
//!
//! # Examples
//!
//! ```
//! use triage_config::Repository;
//!
//! let repo: Repository = "Expensify/App".parse().unwrap();
//! assert_eq!(repo.owner(), "Expensify");
//! assert_eq!(repo.repo(), "App");
//! assert_eq!(repo.to_string(), "Expensify/App");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// Owner of the repository queried when none is configured.
pub const DEFAULT_OWNER: &str = "Expensify";

/// Name of the repository queried when none is configured.
pub const DEFAULT_REPO: &str = "App";

/// A GitHub repository, identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    owner: String,
    repo: String,
}

impl Repository {
    /// Creates a new repository reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_config::Repository;
    ///
    /// let repo = Repository::new("rust-lang", "rust");
    /// assert_eq!(repo.full_name(), "rust-lang/rust");
    /// ```
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses a repository from the short format `"owner/repo"`.
    ///
    /// Surrounding whitespace on either part is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly one `/`, or
    /// if either part is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_config::Repository;
    ///
    /// let repo = Repository::parse_short("rust-lang/rust").unwrap();
    /// assert_eq!(repo.owner(), "rust-lang");
    ///
    /// assert!(Repository::parse_short("invalid").is_err());
    /// assert!(Repository::parse_short("too/many/slashes").is_err());
    /// ```
    pub fn parse_short(s: &str) -> Result<Self> {
        let Some((owner, repo)) = s.split_once('/') else {
            return Err(ConfigError::InvalidRepository(format!(
                "expected 'owner/repo' format, got '{s}'"
            )));
        };

        if repo.contains('/') {
            return Err(ConfigError::InvalidRepository(format!(
                "expected 'owner/repo' format, got '{s}'"
            )));
        }

        let owner = owner.trim();
        let repo = repo.trim();

        if owner.is_empty() || repo.is_empty() {
            return Err(ConfigError::InvalidRepository(format!(
                "owner and repo cannot be empty in '{s}'"
            )));
        }

        Ok(Self::new(owner, repo))
    }

    /// Returns the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the full repository name in `"owner/repo"` format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER, DEFAULT_REPO)
    }
}

impl FromStr for Repository {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_short(s)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
