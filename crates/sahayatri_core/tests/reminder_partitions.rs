use chrono::{NaiveDate, NaiveDateTime};
use sahayatri_core::{
    compose, partition, search, Catalog, PartitionQuery, Priority, Reminder, Stage, TEXT_FIELDS,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

fn noon(d: u32) -> NaiveDateTime {
    day(d).and_hms_opt(12, 0, 0).unwrap()
}

fn reminder(id: &str, date: NaiveDateTime, completed: bool) -> Reminder {
    Reminder {
        id: id.to_string(),
        title: id.to_string(),
        description: String::new(),
        category: "Test".to_string(),
        applicable_stages: vec![Stage::Child],
        date,
        priority: Priority::Medium,
        completed,
    }
}

#[test]
fn reference_day_items_are_today_not_upcoming() {
    let items = vec![
        reminder("same-day", day(20).and_hms_opt(9, 0, 0).unwrap(), false),
        reminder("next-day", noon(21), false),
    ];
    let parts = partition(&items, &PartitionQuery::at(noon(20)));

    assert_eq!(parts.today.len(), 1);
    assert_eq!(parts.today[0].id, "same-day");
    assert_eq!(parts.upcoming.len(), 1);
    assert_eq!(parts.upcoming[0].id, "next-day");
    assert!(parts.completed.is_empty());
}

#[test]
fn completed_items_leave_today_and_upcoming() {
    let items = vec![
        reminder("same-day", day(20).and_hms_opt(9, 0, 0).unwrap(), true),
        reminder("next-day", noon(21), true),
    ];
    let parts = partition(&items, &PartitionQuery::at(noon(20)));

    assert!(parts.today.is_empty());
    assert!(parts.upcoming.is_empty());
    assert_eq!(parts.completed.len(), 2);
}

#[test]
fn selected_date_bucket_is_completion_blind() {
    let items = vec![
        reminder("planned", noon(25), false),
        reminder("already-done", day(25).and_hms_opt(8, 0, 0).unwrap(), true),
        reminder("other-day", noon(26), false),
    ];
    let mut query = PartitionQuery::at(noon(20));
    query.selected_date = Some(day(25));
    let parts = partition(&items, &query);

    let ids: Vec<&str> = parts.selected_date.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["planned", "already-done"]);
}

#[test]
fn upcoming_is_sorted_ascending() {
    let catalog = Catalog::builtin(day(20));
    let reminders = compose(Stage::Senior, &catalog.reminders);
    let parts = partition(&reminders, &PartitionQuery::at(noon(20)));

    assert!(!parts.upcoming.is_empty());
    for pair in parts.upcoming.windows(2) {
        assert!(pair[0].date <= pair[1].date);
    }
}

#[test]
fn builtin_completed_reminder_is_excluded_from_upcoming() {
    let catalog = Catalog::builtin(day(20));
    let reminders = compose(Stage::Youth, &catalog.reminders);
    let parts = partition(&reminders, &PartitionQuery::at(noon(20)));

    // The driving test reminder ships completed and dated tomorrow.
    assert!(parts.completed.iter().any(|r| r.id == "driving-test"));
    assert!(parts.upcoming.iter().all(|r| r.id != "driving-test"));
}

#[test]
fn search_commutes_with_partitioning() {
    let catalog = Catalog::builtin(day(20));
    let reminders = compose(Stage::Senior, &catalog.reminders);
    let query = PartitionQuery::at(noon(20));

    for term in ["deadline", "tax", "HEALTH", "", "no-such-text"] {
        let filter_then_partition = partition(&search(&reminders, term, &TEXT_FIELDS), &query);
        let partition_then_filter = search(&partition(&reminders, &query).upcoming, term, &TEXT_FIELDS);
        assert_eq!(
            filter_then_partition.upcoming, partition_then_filter,
            "term `{term}`"
        );
    }
}
