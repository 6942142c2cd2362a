//! Parsing of the issue list input file.
//!
//! The input is a text file with one identifier per line. The first
//! non-blank line is a header and is discarded. Blank lines are ignored and
//! every identifier is trimmed, so CRLF files work unchanged.

use std::path::Path;

use crate::error::{ProtocolError, Result};
use crate::issue::IssueReference;

/// Parses issue identifiers from the contents of an input file.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidLine`] for the first line that is not a
/// valid issue identifier.
///
/// # Examples
///
/// ```
/// use triage_protocol::parse_identifiers;
///
/// let identifiers = parse_identifiers("header\n\n42\n  7  \n").unwrap();
/// let raw: Vec<&str> = identifiers.iter().map(|r| r.as_str()).collect();
/// assert_eq!(raw, vec!["42", "7"]);
/// ```
pub fn parse_identifiers(text: &str) -> Result<Vec<IssueReference>> {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .skip(1)
        .map(|(line, identifier)| {
            IssueReference::parse(identifier).map_err(|source| ProtocolError::InvalidLine {
                line,
                source: Box::new(source),
            })
        })
        .collect()
}

/// Reads and parses issue identifiers from a file.
///
/// # Errors
///
/// Returns [`ProtocolError::ReadFile`] if the file cannot be read, or any
/// error from [`parse_identifiers`].
pub fn read_identifiers(path: impl AsRef<Path>) -> Result<Vec<IssueReference>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ProtocolError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_identifiers(&text)
}
