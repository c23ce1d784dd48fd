//! Stage-cumulative content composer.
//!
//! # Responsibility
//! - Select the catalog entries visible to a given life stage.
//!
//! # Invariants
//! - Inclusion is cumulative: an entry tagged for any stage at or before
//!   the requested one is selected, so earlier-life items (e.g. the birth
//!   certificate) stay visible for life.
//! - Entries appear at most once, keyed by id, in catalog declaration
//!   order.
//! - Unknown stages are unrepresentable; `Stage` is a closed enum.

use crate::catalog::Catalog;
use crate::model::item::{Document, Recommendation, Reminder, StageTagged};
use crate::model::stage::Stage;
use std::collections::HashSet;

/// The composed item set for one stage, one bucket per item kind.
#[derive(Debug, Clone, PartialEq)]
pub struct StageContent {
    pub documents: Vec<Document>,
    pub reminders: Vec<Reminder>,
    pub recommendations: Vec<Recommendation>,
}

/// Selects the entries applicable to `stage` or any earlier stage.
///
/// Deterministic and idempotent: equal inputs yield deep-equal output.
/// Declaration order is preserved; duplicate ids are dropped after their
/// first occurrence.
pub fn compose<T: StageTagged + Clone>(stage: Stage, entries: &[T]) -> Vec<T> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .filter(|entry| entry.applicable_stages().iter().any(|s| *s <= stage))
        .filter(|entry| seen.insert(entry.id()))
        .cloned()
        .collect()
}

/// Composes all three stage-tagged tables for one stage.
pub fn compose_all(stage: Stage, catalog: &Catalog) -> StageContent {
    StageContent {
        documents: compose(stage, &catalog.documents),
        reminders: compose(stage, &catalog.reminders),
        recommendations: compose(stage, &catalog.recommendations),
    }
}
