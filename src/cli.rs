//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use secrecy::SecretString;

/// Fetch GitHub issues by number and bucket them by label.
///
/// Issues labelled `Bug` are reported as bugs, those labelled `New Feature`
/// as new features, and everything else as other.
#[derive(Parser)]
#[command(name = "triage", version)]
pub struct Cli {
    /// Path to the issue list: one issue number per line, first line is a header
    pub input: PathBuf,

    /// GitHub personal access token
    token: String,
}

impl Cli {
    /// Returns the token, trimmed, wrapped so it is never printed.
    #[must_use]
    pub fn token(&self) -> SecretString {
        SecretString::from(self.token.trim().to_string())
    }
}
