//! Status partitioner for statused items.
//!
//! # Responsibility
//! - Bucket document-kind items into completed / pending / not-started
//!   views.
//!
//! # Invariants
//! - Every item lands in exactly one bucket.
//! - An item without an explicit status is invalid input; no default is
//!   ever inferred.

use crate::model::item::{Document, DocumentStatus};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Seam for items the status partitioner can bucket.
pub trait Statused {
    /// Stable id, used in error reporting.
    fn id(&self) -> &str;
    /// Explicit lifecycle status, when one has been assigned.
    fn status(&self) -> Option<DocumentStatus>;
}

impl Statused for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Option<DocumentStatus> {
        self.status
    }
}

/// An item reached the partitioner without an explicit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingStatusError {
    /// Id of the offending item.
    pub id: String,
}

impl Display for MissingStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "item `{}` has no explicit status", self.id)
    }
}

impl Error for MissingStatusError {}

/// One bucket per document status, input order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusPartitions<T> {
    pub completed: Vec<T>,
    pub pending: Vec<T>,
    pub not_started: Vec<T>,
}

impl<T> StatusPartitions<T> {
    /// The bucket for one status value.
    pub fn bucket(&self, status: DocumentStatus) -> &[T] {
        match status {
            DocumentStatus::Completed => &self.completed,
            DocumentStatus::Pending => &self.pending,
            DocumentStatus::NotStarted => &self.not_started,
        }
    }

    /// Total number of bucketed items.
    pub fn len(&self) -> usize {
        self.completed.len() + self.pending.len() + self.not_started.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Buckets `items` by explicit status.
///
/// Fails on the first item carrying no status; the input is never
/// mutated, and no partial result is returned.
pub fn partition_by_status<T>(items: &[T]) -> Result<StatusPartitions<T>, MissingStatusError>
where
    T: Statused + Clone,
{
    let mut parts = StatusPartitions {
        completed: Vec::new(),
        pending: Vec::new(),
        not_started: Vec::new(),
    };
    for item in items {
        let status = item.status().ok_or_else(|| MissingStatusError {
            id: item.id().to_string(),
        })?;
        match status {
            DocumentStatus::Completed => parts.completed.push(item.clone()),
            DocumentStatus::Pending => parts.pending.push(item.clone()),
            DocumentStatus::NotStarted => parts.not_started.push(item.clone()),
        }
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::{partition_by_status, Statused};
    use crate::model::item::DocumentStatus;

    #[derive(Debug, Clone)]
    struct Row {
        id: &'static str,
        status: Option<DocumentStatus>,
    }

    impl Statused for Row {
        fn id(&self) -> &str {
            self.id
        }

        fn status(&self) -> Option<DocumentStatus> {
            self.status
        }
    }

    #[test]
    fn every_item_lands_in_one_bucket() {
        let rows = vec![
            Row {
                id: "a",
                status: Some(DocumentStatus::Completed),
            },
            Row {
                id: "b",
                status: Some(DocumentStatus::Pending),
            },
            Row {
                id: "c",
                status: Some(DocumentStatus::NotStarted),
            },
        ];
        let parts = partition_by_status(&rows).unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts.bucket(DocumentStatus::Pending).len(), 1);
    }

    #[test]
    fn missing_status_is_an_error() {
        let rows = vec![Row {
            id: "ghost",
            status: None,
        }];
        let err = partition_by_status(&rows).unwrap_err();
        assert_eq!(err.id, "ghost");
    }
}
