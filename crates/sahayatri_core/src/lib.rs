//! Core domain logic for Sahayatri, a citizen-services companion.
//! This crate is the single source of truth for business invariants.

pub mod catalog;
pub mod compose;
pub mod logging;
pub mod model;
pub mod partition;
pub mod search;
pub mod service;

pub use catalog::{Catalog, CatalogDataError};
pub use compose::{compose, compose_all, StageContent};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventId};
pub use model::habit::{Frequency, Habit, HabitId};
pub use model::item::{Document, DocumentStatus, Priority, Recommendation, Reminder, StageTagged};
pub use model::stage::{classify, stage_progress, InvalidAgeError, Stage};
pub use model::NotFoundError;
pub use partition::status::{partition_by_status, MissingStatusError, StatusPartitions, Statused};
pub use partition::temporal::{partition, PartitionQuery, Scheduled, TemporalPartitions};
pub use search::{search, SearchField, Searchable, TEXT_FIELDS};
pub use service::event_service::{add_event, delete_event, NewEventRequest};
pub use service::habit_service::{
    add_habit, aggregate, delete_habit, toggle_habit, HabitStats, NewHabitRequest,
};
pub use service::ValidationError;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
