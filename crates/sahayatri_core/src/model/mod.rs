//! Unified domain model for the citizen-services companion.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one tagged-item shape shared by documents, reminders and
//!   recommendations instead of per-stage copies.
//!
//! # Invariants
//! - Catalog items are identified by a stable string slug, unique per kind.
//! - User-created habits and events are identified by a stable UUID.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod event;
pub mod guide;
pub mod habit;
pub mod item;
pub mod office;
pub mod resource;
pub mod stage;

/// Lookup failure for an id absent from a catalog table or user collection.
///
/// Deterministic input problem; callers surface it and never retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    /// Item kind label, e.g. `document`, `habit`.
    pub entity: &'static str,
    /// The id that failed to resolve.
    pub id: String,
}

impl NotFoundError {
    pub fn new(entity: &'static str, id: impl Into<String>) -> Self {
        Self {
            entity,
            id: id.into(),
        }
    }
}

impl Display for NotFoundError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} not found: {}", self.entity, self.id)
    }
}

impl Error for NotFoundError {}
