//! Stage-tagged catalog items.
//!
//! # Responsibility
//! - Define the document / reminder / recommendation records held by the
//!   catalog, each tagged with the stages it applies to.
//! - Expose the `StageTagged` seam the content composer works against.
//!
//! # Invariants
//! - `id` is unique within its item kind.
//! - `applicable_stages` is non-empty (enforced by `Catalog::validate`).

use crate::model::stage::Stage;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Urgency label shared by reminders, recommendations and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Lifecycle state of a tracked document.
///
/// Every document carries exactly one of these; there is no inferred
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStatus {
    /// Obtained and on file.
    Completed,
    /// Application in flight.
    Pending,
    /// Not yet applied for.
    NotStarted,
}

/// Common seam for items the composer can select by life stage.
pub trait StageTagged {
    /// Stable slug, unique within the item kind.
    fn id(&self) -> &str;
    /// Stages this item applies to. Never empty for valid catalog data.
    fn applicable_stages(&self) -> &[Stage];
}

/// A government document tracked through its application lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-text label, e.g. `Essential`, `Financial`.
    pub category: String,
    pub applicable_stages: Vec<Stage>,
    /// Absent when the document has no explicit status yet; the status
    /// partitioner treats that as invalid input rather than defaulting.
    pub status: Option<DocumentStatus>,
    /// Application deadline, when one exists.
    pub due_date: Option<NaiveDate>,
}

/// A dated, completable reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub applicable_stages: Vec<Stage>,
    pub date: NaiveDateTime,
    pub priority: Priority,
    pub completed: bool,
}

/// A stage-appropriate suggestion shown on the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub applicable_stages: Vec<Stage>,
    pub priority: Priority,
}

impl StageTagged for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn applicable_stages(&self) -> &[Stage] {
        &self.applicable_stages
    }
}

impl StageTagged for Reminder {
    fn id(&self) -> &str {
        &self.id
    }

    fn applicable_stages(&self) -> &[Stage] {
        &self.applicable_stages
    }
}

impl StageTagged for Recommendation {
    fn id(&self) -> &str {
        &self.id
    }

    fn applicable_stages(&self) -> &[Stage] {
        &self.applicable_stages
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentStatus;

    #[test]
    fn status_serializes_in_kebab_case() {
        let json = serde_json::to_string(&DocumentStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not-started\"");
    }
}
