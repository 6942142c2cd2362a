//! Label-based classification of issues into buckets.
//!
//! Each issue lands in exactly one bucket, decided by the first matching
//! label in a fixed priority order:
//!
//! | Priority | Label | Bucket |
//! |----------|-------|--------|
//! | 1 | `Bug` | Bugs |
//! | 2 | `New Feature` | New Features |
//! | - | (anything else) | Other |
//!
//! Label matching is exact and case-sensitive.
//!
//! # Example
//!
//! ```
//! use triage_protocol::{Buckets, Classification, IssueRecord};
//!
//! let records = vec![
//!     IssueRecord::new(1, "Crash", vec!["Bug".to_string()]),
//!     IssueRecord::new(2, "Dark mode", vec!["New Feature".to_string()]),
//!     IssueRecord::new(3, "Docs", vec![]),
//! ];
//!
//! let buckets = Buckets::from_records(records);
//! assert_eq!(buckets.bugs.len(), 1);
//! assert_eq!(buckets.new_features.len(), 1);
//! assert_eq!(buckets.other.len(), 1);
//! assert_eq!(Classification::of(&buckets.other[0]), Classification::Other);
//! ```

use serde::Serialize;

use crate::issue::IssueRecord;

/// Label that places an issue in the Bugs bucket.
pub const BUG_LABEL: &str = "Bug";

/// Label that places an issue in the New Features bucket.
pub const NEW_FEATURE_LABEL: &str = "New Feature";

/// The bucket an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The issue carries the `Bug` label.
    Bug,
    /// The issue carries `New Feature` but not `Bug`.
    NewFeature,
    /// Neither label is present.
    Other,
}

impl Classification {
    /// Returns the classification for a list of label names.
    ///
    /// `Bug` wins over `New Feature` regardless of label order.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_protocol::Classification;
    ///
    /// let labels = vec!["New Feature".to_string(), "Bug".to_string()];
    /// assert_eq!(Classification::from_labels(&labels), Classification::Bug);
    ///
    /// let labels = vec!["Weekly".to_string()];
    /// assert_eq!(Classification::from_labels(&labels), Classification::Other);
    /// ```
    #[must_use]
    pub fn from_labels(labels: &[String]) -> Self {
        // Priority order, first match wins
        const RULES: &[(&str, Classification)] = &[
            (BUG_LABEL, Classification::Bug),
            (NEW_FEATURE_LABEL, Classification::NewFeature),
        ];

        for &(label, classification) in RULES {
            if labels.iter().any(|l| l == label) {
                return classification;
            }
        }

        Self::Other
    }

    /// Returns the classification of an issue record.
    #[must_use]
    pub fn of(record: &IssueRecord) -> Self {
        Self::from_labels(&record.labels)
    }

    /// Returns the heading used when printing this bucket.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Bug => "Bugs",
            Self::NewFeature => "New Features",
            Self::Other => "Other",
        }
    }

    /// Returns all classifications in report order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Bug, Self::NewFeature, Self::Other]
    }
}

/// Issues grouped by classification.
///
/// Within each bucket, records keep the order in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Buckets {
    /// Issues labelled `Bug`.
    pub bugs: Vec<IssueRecord>,
    /// Issues labelled `New Feature` (and not `Bug`).
    pub new_features: Vec<IssueRecord>,
    /// Everything else.
    pub other: Vec<IssueRecord>,
}

impl Buckets {
    /// Creates empty buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies every record, preserving input order within each bucket.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = IssueRecord>) -> Self {
        records.into_iter().fold(Self::new(), |mut buckets, record| {
            buckets.push(record);
            buckets
        })
    }

    /// Classifies a record and appends it to the matching bucket.
    ///
    /// Returns the classification that was applied.
    pub fn push(&mut self, record: IssueRecord) -> Classification {
        let classification = Classification::of(&record);
        self.bucket_mut(classification).push(record);
        classification
    }

    /// Returns the records in the given bucket.
    #[must_use]
    pub fn bucket(&self, classification: Classification) -> &[IssueRecord] {
        match classification {
            Classification::Bug => &self.bugs,
            Classification::NewFeature => &self.new_features,
            Classification::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, classification: Classification) -> &mut Vec<IssueRecord> {
        match classification {
            Classification::Bug => &mut self.bugs,
            Classification::NewFeature => &mut self.new_features,
            Classification::Other => &mut self.other,
        }
    }

    /// Returns the total number of records across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bugs.len() + self.new_features.len() + self.other.len()
    }

    /// Returns `true` if no records have been classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<IssueRecord> for Buckets {
    fn from_iter<I: IntoIterator<Item = IssueRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
