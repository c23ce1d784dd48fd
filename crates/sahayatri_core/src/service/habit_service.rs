//! Habit tracker use-cases.
//!
//! # Responsibility
//! - Provide add/toggle/delete entry points over a caller-owned habit
//!   collection, plus summary aggregation.
//!
//! # Invariants
//! - New habits start with zero streak and progress, not completed.
//! - Aggregation over an empty collection yields all zeros instead of a
//!   division-by-zero or empty-reduction error.

use crate::model::habit::{Frequency, Habit, HabitId};
use crate::model::NotFoundError;
use crate::service::ValidationError;
use chrono::NaiveDate;
use log::info;

/// Request model for creating a habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabitRequest {
    /// Required; must contain non-whitespace text.
    pub title: String,
    pub description: String,
    pub category: String,
    pub frequency: Frequency,
    /// Day the habit starts counting, supplied by the caller's clock.
    pub start_date: NaiveDate,
}

/// Summary statistics over a habit collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HabitStats {
    /// Rounded mean of per-habit progress; 0 for an empty collection.
    pub total_progress_pct: u8,
    pub completed_count: usize,
    /// Maximum streak; 0 for an empty collection.
    pub max_streak: u32,
}

/// Validates and appends a new habit, returning its id.
///
/// # Errors
/// - `ValidationError` naming `title` when the title is empty or
///   whitespace; the collection is left untouched.
pub fn add_habit(
    habits: &mut Vec<Habit>,
    request: NewHabitRequest,
) -> Result<HabitId, ValidationError> {
    if request.title.trim().is_empty() {
        return Err(ValidationError {
            missing: vec!["title"],
        });
    }

    let habit = Habit::new(
        request.title,
        request.description,
        request.category,
        request.frequency,
        request.start_date,
    );
    let id = habit.id;
    habits.push(habit);
    info!("event=habit_added module=service status=ok id={id}");
    Ok(id)
}

/// Toggles one habit's completed state.
///
/// Completion ratchets streak/progress forward; un-completion reverses
/// neither (see `Habit::toggle`).
pub fn toggle_habit(habits: &mut [Habit], id: HabitId) -> Result<&Habit, NotFoundError> {
    let habit = habits
        .iter_mut()
        .find(|h| h.id == id)
        .ok_or_else(|| NotFoundError::new("habit", id.to_string()))?;
    habit.toggle();
    Ok(&*habit)
}

/// Removes one habit, returning the removed record.
pub fn delete_habit(habits: &mut Vec<Habit>, id: HabitId) -> Result<Habit, NotFoundError> {
    let index = habits
        .iter()
        .position(|h| h.id == id)
        .ok_or_else(|| NotFoundError::new("habit", id.to_string()))?;
    let removed = habits.remove(index);
    info!("event=habit_deleted module=service status=ok id={id}");
    Ok(removed)
}

/// Computes summary statistics for display.
///
/// Defined for the empty collection: all fields are zero.
pub fn aggregate(habits: &[Habit]) -> HabitStats {
    if habits.is_empty() {
        return HabitStats::default();
    }
    let progress_sum: u32 = habits.iter().map(|h| u32::from(h.progress)).sum();
    let mean = f64::from(progress_sum) / habits.len() as f64;
    HabitStats {
        total_progress_pct: mean.round() as u8,
        completed_count: habits.iter().filter(|h| h.completed).count(),
        max_streak: habits.iter().map(|h| h.streak).max().unwrap_or(0),
    }
}
