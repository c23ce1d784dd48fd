//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `sahayatri_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use sahayatri_core::{classify, compose_all, Catalog};

fn main() {
    println!("sahayatri_core ping={}", sahayatri_core::ping());
    println!("sahayatri_core version={}", sahayatri_core::core_version());

    // Fixed demo input keeps the probe output stable across runs.
    let demo_age = 25;
    let demo_day = NaiveDate::from_ymd_opt(2025, 3, 20).expect("valid demo date");
    match classify(demo_age) {
        Ok(stage) => {
            let content = compose_all(stage, &Catalog::builtin(demo_day));
            println!(
                "age={demo_age} stage={stage} documents={} reminders={} recommendations={}",
                content.documents.len(),
                content.reminders.len(),
                content.recommendations.len()
            );
        }
        Err(err) => eprintln!("classification failed: {err}"),
    }
}
