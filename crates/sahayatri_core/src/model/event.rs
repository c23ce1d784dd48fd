//! Scheduled event model.
//!
//! # Invariants
//! - Events are immutable once created; the only mutation is removal.

use crate::model::item::Priority;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a user-created event.
pub type EventId = Uuid;

/// A user-scheduled appointment or deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub category: String,
    pub description: String,
    pub priority: Priority,
}
