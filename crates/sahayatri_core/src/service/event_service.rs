//! Scheduler use-cases.
//!
//! # Responsibility
//! - Provide add/delete entry points over a caller-owned event
//!   collection.
//!
//! # Invariants
//! - `title`, `date` and `time` are all required; the error names every
//!   missing field and no event is added on failure.
//! - Events are not edited in place; callers delete and recreate.

use crate::model::event::{Event, EventId};
use crate::model::item::Priority;
use crate::model::NotFoundError;
use crate::service::ValidationError;
use chrono::{NaiveDate, NaiveTime};
use log::info;
use uuid::Uuid;

/// Request model for scheduling an event.
///
/// `date` and `time` are optional here because the UI may submit before
/// the user picked them; validation turns their absence into field
/// errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEventRequest {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub category: String,
    pub description: String,
    pub priority: Priority,
}

/// Validates and appends a new event, returning its id.
///
/// # Errors
/// - `ValidationError` listing every missing required field, in
///   `title`, `date`, `time` order; the collection is left untouched.
pub fn add_event(
    events: &mut Vec<Event>,
    request: NewEventRequest,
) -> Result<EventId, ValidationError> {
    let mut missing = Vec::new();
    if request.title.trim().is_empty() {
        missing.push("title");
    }
    if request.date.is_none() {
        missing.push("date");
    }
    if request.time.is_none() {
        missing.push("time");
    }
    match (request.date, request.time) {
        (Some(date), Some(time)) if missing.is_empty() => {
            let event = Event {
                id: Uuid::new_v4(),
                title: request.title,
                date,
                time,
                category: request.category,
                description: request.description,
                priority: request.priority,
            };
            let id = event.id;
            events.push(event);
            info!("event=event_added module=service status=ok id={id}");
            Ok(id)
        }
        _ => Err(ValidationError { missing }),
    }
}

/// Removes one event, returning the removed record.
pub fn delete_event(events: &mut Vec<Event>, id: EventId) -> Result<Event, NotFoundError> {
    let index = events
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| NotFoundError::new("event", id.to_string()))?;
    let removed = events.remove(index);
    info!("event=event_deleted module=service status=ok id={id}");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::{add_event, NewEventRequest};
    use crate::model::item::Priority;
    use chrono::NaiveTime;

    #[test]
    fn all_missing_fields_are_named() {
        let mut events = Vec::new();
        let err = add_event(
            &mut events,
            NewEventRequest {
                title: "".to_string(),
                date: None,
                time: Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
                category: String::new(),
                description: String::new(),
                priority: Priority::Medium,
            },
        )
        .unwrap_err();
        assert_eq!(err.missing, vec!["title", "date"]);
        assert!(events.is_empty());
    }
}
