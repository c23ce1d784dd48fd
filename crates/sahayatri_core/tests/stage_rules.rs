use sahayatri_core::{classify, stage_progress, Stage};

#[test]
fn classification_boundary_table() {
    let cases = [
        (0, Stage::Child),
        (15, Stage::Child),
        (16, Stage::Youth),
        (21, Stage::Youth),
        (22, Stage::Adult),
        (45, Stage::Adult),
        (46, Stage::Senior),
        (99, Stage::Senior),
    ];
    for (age, expected) in cases {
        assert_eq!(classify(age).unwrap(), expected, "age {age}");
    }
}

#[test]
fn classification_is_total_over_valid_ages() {
    for age in 0..=130 {
        classify(age).unwrap();
    }
}

#[test]
fn negative_age_reports_the_offending_value() {
    let err = classify(-7).unwrap_err();
    assert_eq!(err.age, -7);
    assert!(err.to_string().contains("-7"));
}

#[test]
fn age_span_labels_match_the_tab_strip() {
    assert_eq!(Stage::Child.age_span_label(), "0-15 Years");
    assert_eq!(Stage::Senior.age_span_label(), "46+ Years");
}

#[test]
fn journey_progress_tracks_the_current_stage() {
    // A 25-year-old is done with child/youth, partway through adulthood.
    assert_eq!(stage_progress(Stage::Child, 25), 100);
    assert_eq!(stage_progress(Stage::Youth, 25), 100);
    assert!(stage_progress(Stage::Adult, 25) > 0);
    assert!(stage_progress(Stage::Adult, 25) < 100);
    assert_eq!(stage_progress(Stage::Senior, 25), 0);
}
