//! Shared protocol types for triage.
//!
//! This crate defines the data that flows through a triage run: the issue
//! identifiers read from the input file, the issue records fetched from the
//! tracker, and the buckets they are classified into.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`issue`]: `IssueReference` and `IssueRecord`
//! - [`classification`]: Label-based `Classification` and `Buckets`
//! - [`input`]: Parsing of the one-identifier-per-line input file
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use triage_protocol::{Buckets, IssueRecord, parse_identifiers};
//!
//! let identifiers = parse_identifiers("Issue\n1\n2\n").unwrap();
//! assert_eq!(identifiers.len(), 2);
//!
//! let buckets = Buckets::from_records(vec![
//!     IssueRecord::new(1, "Crash", vec!["Bug".to_string()]),
//!     IssueRecord::new(2, "Docs", vec![]),
//! ]);
//! assert_eq!(buckets.len(), identifiers.len());
//! ```

pub mod classification;
pub mod error;
pub mod input;
pub mod issue;

// Re-export primary types at crate root for convenience
pub use classification::{BUG_LABEL, Buckets, Classification, NEW_FEATURE_LABEL};
pub use error::{ProtocolError, Result};
pub use input::{parse_identifiers, read_identifiers};
pub use issue::{IssueRecord, IssueReference};
