//! Static content catalog.
//!
//! # Responsibility
//! - Hold the versioned content tables: documents, reminders,
//!   recommendations, guides, service offices and library resources.
//! - Provide id lookups and data-invariant validation.
//!
//! # Invariants
//! - Ids are unique within each table.
//! - Stage-tagged entries carry at least one applicable stage.
//! - Table order is declaration order; the composer preserves it.

use crate::model::guide::Guide;
use crate::model::item::{Document, Recommendation, Reminder, StageTagged};
use crate::model::office::ServiceOffice;
use crate::model::resource::Resource;
use crate::model::NotFoundError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod builtin;

/// Catalog data violates a table invariant.
///
/// Raised by [`Catalog::validate`]; a failing catalog is a deployment
/// defect, not a user error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogDataError {
    /// Two entries in one table share an id.
    DuplicateId { table: &'static str, id: String },
    /// A stage-tagged entry has an empty `applicable_stages` set.
    MissingStages { table: &'static str, id: String },
}

impl Display for CatalogDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { table, id } => {
                write!(f, "duplicate id `{id}` in {table} table")
            }
            Self::MissingStages { table, id } => {
                write!(f, "entry `{id}` in {table} table has no applicable stages")
            }
        }
    }
}

impl Error for CatalogDataError {}

/// The full static content set supplied to the core at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub documents: Vec<Document>,
    pub reminders: Vec<Reminder>,
    pub recommendations: Vec<Recommendation>,
    pub guides: Vec<Guide>,
    pub offices: Vec<ServiceOffice>,
    pub resources: Vec<Resource>,
}

impl Catalog {
    /// Looks up a document by slug.
    pub fn document(&self, id: &str) -> Result<&Document, NotFoundError> {
        self.documents
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| NotFoundError::new("document", id))
    }

    /// Looks up a reminder by slug.
    pub fn reminder(&self, id: &str) -> Result<&Reminder, NotFoundError> {
        self.reminders
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| NotFoundError::new("reminder", id))
    }

    /// Looks up a recommendation by slug.
    pub fn recommendation(&self, id: &str) -> Result<&Recommendation, NotFoundError> {
        self.recommendations
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| NotFoundError::new("recommendation", id))
    }

    /// Looks up a wizard guide by slug.
    pub fn guide(&self, id: &str) -> Result<&Guide, NotFoundError> {
        self.guides
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| NotFoundError::new("guide", id))
    }

    /// Unique office categories in declaration order (drives the directory
    /// tab strip).
    pub fn office_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.offices
            .iter()
            .map(|o| o.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Checks table invariants: unique ids, non-empty stage sets.
    pub fn validate(&self) -> Result<(), CatalogDataError> {
        check_stage_table("documents", &self.documents)?;
        check_stage_table("reminders", &self.reminders)?;
        check_stage_table("recommendations", &self.recommendations)?;
        check_ids("guides", self.guides.iter().map(|g| g.id.as_str()))?;
        check_ids("offices", self.offices.iter().map(|o| o.id.as_str()))?;
        check_ids("resources", self.resources.iter().map(|r| r.id.as_str()))?;
        Ok(())
    }
}

fn check_stage_table<T: StageTagged>(
    table: &'static str,
    entries: &[T],
) -> Result<(), CatalogDataError> {
    check_ids(table, entries.iter().map(StageTagged::id))?;
    for entry in entries {
        if entry.applicable_stages().is_empty() {
            return Err(CatalogDataError::MissingStages {
                table,
                id: entry.id().to_string(),
            });
        }
    }
    Ok(())
}

fn check_ids<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogDataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogDataError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
