//! Derived item partitions for display and filtering.
//!
//! # Responsibility
//! - Bucket dated items into temporal partitions around a reference
//!   instant.
//! - Bucket statused items by their lifecycle status.

pub mod status;
pub mod temporal;
