//! Resource library entries.
//!
//! # Responsibility
//! - Describe curated guides, videos and downloadable documents, with the
//!   language and kind filters the library view offers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Media kind of a library resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Video,
    Document,
}

/// Content language of a library resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Nepali.
    Ne,
}

/// A curated library entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub kind: ResourceKind,
    pub language: Language,
    pub url: String,
    pub date_added: NaiveDate,
}

/// Keeps only resources of the given kind, preserving order.
pub fn of_kind(resources: &[Resource], kind: ResourceKind) -> Vec<Resource> {
    resources
        .iter()
        .filter(|r| r.kind == kind)
        .cloned()
        .collect()
}

/// Keeps only resources in the given language; `None` keeps everything.
pub fn in_language(resources: &[Resource], language: Option<Language>) -> Vec<Resource> {
    resources
        .iter()
        .filter(|r| language.map_or(true, |lang| r.language == lang))
        .cloned()
        .collect()
}
