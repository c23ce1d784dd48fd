//! Temporal partitioner for dated items.
//!
//! # Responsibility
//! - Bucket reminders and events into today / upcoming / completed /
//!   selected-date views around a reference instant.
//!
//! # Invariants
//! - `today` compares calendar days only; time of day is ignored.
//! - `upcoming` compares full instants (strictly later than the
//!   reference) and is sorted ascending, stable on equal instants.
//! - Completed items never appear in `today` or `upcoming`.
//! - `selected_date` ignores the completion flag entirely.
//! - Undated items land in no bucket unless the query opts into the
//!   explicit `undated` one.

use crate::model::event::Event;
use crate::model::item::Reminder;
use chrono::{NaiveDate, NaiveDateTime};

/// Seam for items the temporal partitioner can bucket.
pub trait Scheduled {
    /// The item's date and time, when it has one.
    fn occurs_at(&self) -> Option<NaiveDateTime>;
    /// Whether the item has been marked done.
    fn is_completed(&self) -> bool;
}

impl Scheduled for Reminder {
    fn occurs_at(&self) -> Option<NaiveDateTime> {
        Some(self.date)
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Scheduled for Event {
    fn occurs_at(&self) -> Option<NaiveDateTime> {
        Some(self.date.and_time(self.time))
    }

    fn is_completed(&self) -> bool {
        // Events have no completion lifecycle; they are deleted instead.
        false
    }
}

/// Options for one partitioning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionQuery {
    /// The "now" all buckets are computed against.
    pub reference: NaiveDateTime,
    /// Calendar day for the optional `selected_date` bucket.
    pub selected_date: Option<NaiveDate>,
    /// Whether to collect undated items into the `undated` bucket.
    pub include_undated: bool,
}

impl PartitionQuery {
    /// Query with only the mandatory reference instant set.
    pub fn at(reference: NaiveDateTime) -> Self {
        Self {
            reference,
            selected_date: None,
            include_undated: false,
        }
    }
}

/// Result buckets of one partitioning pass.
///
/// `selected_date` stays empty when the query names no day; `undated`
/// stays empty unless the query opts in.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalPartitions<T> {
    pub today: Vec<T>,
    pub upcoming: Vec<T>,
    pub completed: Vec<T>,
    pub selected_date: Vec<T>,
    pub undated: Vec<T>,
}

/// Buckets `items` according to `query`.
///
/// Input order is preserved within every bucket except `upcoming`, which
/// is sorted ascending by instant (stable, so ties keep input order).
/// The input is never mutated.
pub fn partition<T: Scheduled + Clone>(items: &[T], query: &PartitionQuery) -> TemporalPartitions<T> {
    let reference_day = query.reference.date();
    let mut parts = TemporalPartitions {
        today: Vec::new(),
        upcoming: Vec::new(),
        completed: Vec::new(),
        selected_date: Vec::new(),
        undated: Vec::new(),
    };

    for item in items {
        let occurs_at = match item.occurs_at() {
            Some(instant) => instant,
            None => {
                if query.include_undated {
                    parts.undated.push(item.clone());
                }
                continue;
            }
        };

        if let Some(day) = query.selected_date {
            if occurs_at.date() == day {
                parts.selected_date.push(item.clone());
            }
        }

        if item.is_completed() {
            parts.completed.push(item.clone());
            continue;
        }
        if occurs_at.date() == reference_day {
            parts.today.push(item.clone());
        }
        if occurs_at > query.reference {
            parts.upcoming.push(item.clone());
        }
    }

    parts
        .upcoming
        .sort_by_key(|item| item.occurs_at().expect("upcoming items are dated"));
    parts
}

#[cfg(test)]
mod tests {
    use super::{partition, PartitionQuery, Scheduled};
    use chrono::{NaiveDate, NaiveDateTime};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        at: Option<NaiveDateTime>,
        done: bool,
    }

    impl Scheduled for Item {
        fn occurs_at(&self) -> Option<NaiveDateTime> {
            self.at
        }

        fn is_completed(&self) -> bool {
            self.done
        }
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn item(name: &'static str, instant: NaiveDateTime, done: bool) -> Item {
        Item {
            name,
            at: Some(instant),
            done,
        }
    }

    #[test]
    fn upcoming_ties_keep_input_order() {
        let items = vec![
            item("b", at(25, 10), false),
            item("a", at(25, 10), false),
            item("earlier", at(21, 9), false),
        ];
        let parts = partition(&items, &PartitionQuery::at(at(20, 12)));
        let names: Vec<&str> = parts.upcoming.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["earlier", "b", "a"]);
    }

    #[test]
    fn undated_items_need_opt_in() {
        let items = vec![Item {
            name: "floating",
            at: None,
            done: false,
        }];

        let silent = partition(&items, &PartitionQuery::at(at(20, 12)));
        assert!(silent.undated.is_empty());
        assert!(silent.today.is_empty());

        let mut query = PartitionQuery::at(at(20, 12));
        query.include_undated = true;
        let collected = partition(&items, &query);
        assert_eq!(collected.undated.len(), 1);
    }

    #[test]
    fn selected_date_ignores_completion() {
        let items = vec![item("done-today", at(20, 9), true)];
        let mut query = PartitionQuery::at(at(20, 12));
        query.selected_date = NaiveDate::from_ymd_opt(2025, 3, 20);

        let parts = partition(&items, &query);
        assert_eq!(parts.selected_date.len(), 1);
        assert!(parts.today.is_empty());
        assert_eq!(parts.completed.len(), 1);
    }
}
