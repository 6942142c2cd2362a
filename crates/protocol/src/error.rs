//! Error types for protocol operations.

use std::path::PathBuf;

/// Errors that can occur while reading or validating issue input.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// An identifier was empty after trimming.
    #[error("issue identifier cannot be empty")]
    EmptyIdentifier,

    /// An identifier could not be parsed as an issue number.
    #[error("invalid issue identifier '{identifier}': expected a positive issue number")]
    InvalidIdentifier {
        /// The offending identifier, trimmed.
        identifier: String,
    },

    /// An identifier on a specific input line could not be parsed.
    #[error("line {line}: {source}")]
    InvalidLine {
        /// The 1-based line number in the input file.
        line: usize,
        /// The underlying parse error.
        #[source]
        source: Box<ProtocolError>,
    },

    /// Failed to read the input file.
    #[error("failed to read input file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_identifier() {
        let err = ProtocolError::InvalidIdentifier {
            identifier: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid issue identifier 'abc': expected a positive issue number"
        );
    }

    #[test]
    fn error_display_invalid_line_includes_line_number() {
        let err = ProtocolError::InvalidLine {
            line: 3,
            source: Box::new(ProtocolError::EmptyIdentifier),
        };
        assert_eq!(err.to_string(), "line 3: issue identifier cannot be empty");
    }

    #[test]
    fn error_display_read_file() {
        let err = ProtocolError::ReadFile {
            path: PathBuf::from("issues.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.to_string().contains("issues.csv"));
    }
}
