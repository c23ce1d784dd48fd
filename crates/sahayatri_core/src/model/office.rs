//! Local service office directory entries.
//!
//! # Responsibility
//! - Describe nearby offices (government, healthcare, ...) and the services
//!   each one offers, for directory browsing and search.

use serde::{Deserialize, Serialize};

/// A physical office listed in the local services directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffice {
    pub id: String,
    pub name: String,
    /// Directory grouping, e.g. `Government`, `Healthcare`.
    pub category: String,
    pub address: String,
    pub contact: String,
    /// Opening hours as displayed, e.g. `Sun-Fri 10:00 AM - 4:00 PM`.
    pub hours: String,
    /// Average user rating out of 5.
    pub rating: f32,
    pub review_count: u32,
    pub distance_km: f32,
    /// Services offered at this office; searchable alongside name/address.
    pub offered_services: Vec<String>,
}
