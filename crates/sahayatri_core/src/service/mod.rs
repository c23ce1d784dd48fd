//! Mutation entry points for caller-owned collections.
//!
//! # Responsibility
//! - Validate user input before touching any collection.
//! - Keep collection ownership with the caller: every entry point takes
//!   the collection explicitly, so there is no hidden shared state.
//!
//! # Invariants
//! - A failed validation leaves the collection untouched.
//! - Within one synchronous call chain, a mutation is fully applied
//!   before any derived computation observes the collection.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod event_service;
pub mod habit_service;

/// Required user-input fields are missing.
///
/// Carries every missing field so the caller can surface them all at
/// once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field names in declaration order, e.g. `["title", "time"]`.
    pub missing: Vec<&'static str>,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing required field(s): {}", self.missing.join(", "))
    }
}

impl Error for ValidationError {}
