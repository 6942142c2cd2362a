//! Issue identifiers and fetched issue records.
//!
//! An [`IssueReference`] is what the input file names; an [`IssueRecord`] is
//! what the issue tracker returns for it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ProtocolError, Result};

/// A reference to a single issue, as read from one input line.
///
/// The raw text is kept (trimmed) alongside the parsed issue number so that
/// error messages and logs can show exactly what the input contained.
///
/// # Examples
///
/// ```
/// use triage_protocol::IssueReference;
///
/// let reference = IssueReference::parse("  42 ").unwrap();
/// assert_eq!(reference.as_str(), "42");
/// assert_eq!(reference.number(), 42);
///
/// // A leading '#' is accepted
/// assert_eq!(IssueReference::parse("#7").unwrap().number(), 7);
///
/// assert!(IssueReference::parse("   ").is_err());
/// assert!(IssueReference::parse("not-a-number").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueReference {
    raw: String,
    number: u64,
}

impl IssueReference {
    /// Parses an identifier, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyIdentifier`] if nothing remains after
    /// trimming, or [`ProtocolError::InvalidIdentifier`] if the text is not a
    /// positive integer.
    pub fn parse(s: &str) -> Result<Self> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ProtocolError::EmptyIdentifier);
        }

        let digits = raw.strip_prefix('#').unwrap_or(raw);
        let number = digits
            .parse::<u64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ProtocolError::InvalidIdentifier {
                identifier: raw.to_string(),
            })?;

        Ok(Self {
            raw: raw.to_string(),
            number,
        })
    }

    /// Returns the trimmed identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the issue number to request.
    #[must_use]
    pub fn number(&self) -> u64 {
        self.number
    }
}

impl FromStr for IssueReference {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for IssueReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.number)
    }
}

/// Metadata for one fetched issue.
///
/// Only the fields the classifier and the report need are kept. When
/// deserializing, `labels` accepts either label objects (`{"name": "Bug"}`,
/// as the REST API returns them) or plain strings.
///
/// # Examples
///
/// ```
/// use triage_protocol::IssueRecord;
///
/// let json = r#"{
///     "number": 42,
///     "title": "Crash on launch",
///     "labels": [{ "name": "Bug", "color": "d73a4a" }, "Daily"]
/// }"#;
/// let record: IssueRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.number, 42);
/// assert_eq!(record.labels, vec!["Bug", "Daily"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// The issue number.
    pub number: u64,
    /// The issue title.
    pub title: String,
    /// Label names, in the order the tracker returned them.
    #[serde(default, deserialize_with = "deserialize_label_names")]
    pub labels: Vec<String>,
}

impl IssueRecord {
    /// Creates a new issue record.
    #[must_use]
    pub fn new(number: u64, title: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            number,
            title: title.into(),
            labels,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelPayload {
    Name(String),
    Object { name: String },
}

fn deserialize_label_names<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels = Vec::<LabelPayload>::deserialize(deserializer)?;
    Ok(labels
        .into_iter()
        .map(|label| match label {
            LabelPayload::Name(name) | LabelPayload::Object { name } => name,
        })
        .collect())
}
