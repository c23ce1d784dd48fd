//! Habit domain model.
//!
//! # Responsibility
//! - Define the user-owned habit record and its toggle lifecycle.
//!
//! # Invariants
//! - `progress` is always within `[0, 100]`.
//! - Completing a habit ratchets `streak` and `progress` forward;
//!   un-completing reverses neither. This asymmetry is intended product
//!   behavior and is asserted by tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a user-created habit.
pub type HabitId = Uuid;

/// Progress gained each time a habit is marked completed.
pub const PROGRESS_STEP: u8 = 10;

/// How often a habit is meant to recur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

/// A tracked personal habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub frequency: Frequency,
    /// Consecutive completions. Never decremented.
    pub streak: u32,
    pub completed: bool,
    /// Completion percentage, clamped to 100.
    pub progress: u8,
    pub start_date: NaiveDate,
}

impl Habit {
    /// Creates a fresh habit with zeroed streak and progress.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            frequency,
            streak: 0,
            completed: false,
            progress: 0,
            start_date,
        }
    }

    /// Flips the completed flag.
    ///
    /// `false -> true` increments the streak and adds [`PROGRESS_STEP`] to
    /// progress, capped at 100. `true -> false` changes only the flag.
    pub fn toggle(&mut self) {
        if self.completed {
            self.completed = false;
            return;
        }
        self.completed = true;
        self.streak += 1;
        self.progress = self.progress.saturating_add(PROGRESS_STEP).min(100);
    }
}

#[cfg(test)]
mod tests {
    use super::{Frequency, Habit};
    use chrono::NaiveDate;

    fn habit() -> Habit {
        Habit::new(
            "Morning Exercise",
            "30 minutes of physical activity",
            "Health",
            Frequency::Daily,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    #[test]
    fn toggle_ratchets_forward_only() {
        let mut h = habit();
        h.streak = 3;
        h.progress = 50;

        h.toggle();
        assert!(h.completed);
        assert_eq!(h.streak, 4);
        assert_eq!(h.progress, 60);

        h.toggle();
        assert!(!h.completed);
        assert_eq!(h.streak, 4);
        assert_eq!(h.progress, 60);
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        let mut h = habit();
        h.progress = 95;
        h.toggle();
        assert_eq!(h.progress, 100);
    }
}
