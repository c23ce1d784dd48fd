//! Document how-to guides.
//!
//! # Responsibility
//! - Describe step-by-step application guides shown by the document wizard.

use serde::{Deserialize, Serialize};

/// How involved a document application process is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// A wizard guide for obtaining one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Wizard grouping, e.g. `Essential Documents`.
    pub category: String,
    pub complexity: Complexity,
    /// Typical processing time as displayed, e.g. `2-3 weeks`.
    pub processing_time: String,
}
