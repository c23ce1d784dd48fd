use chrono::NaiveDate;
use sahayatri_core::model::resource::{in_language, of_kind, Language, ResourceKind};
use sahayatri_core::{
    compose, partition_by_status, search, Catalog, DocumentStatus, SearchField, Stage, TEXT_FIELDS,
};

fn catalog() -> Catalog {
    Catalog::builtin(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
}

#[test]
fn adult_documents_bucket_by_status() {
    let documents = compose(Stage::Adult, &catalog().documents);
    let parts = partition_by_status(&documents).unwrap();

    assert_eq!(parts.len(), documents.len());
    assert_eq!(parts.completed.len(), 3);
    assert_eq!(parts.pending.len(), 3);
    assert_eq!(parts.not_started.len(), 4);
    assert!(parts.completed.iter().any(|d| d.id == "passport"));
    assert!(parts
        .bucket(DocumentStatus::NotStarted)
        .iter()
        .any(|d| d.id == "citizenship"));
}

#[test]
fn document_without_status_is_rejected() {
    let mut documents = compose(Stage::Child, &catalog().documents);
    documents[0].status = None;
    let err = partition_by_status(&documents).unwrap_err();
    assert_eq!(err.id, documents[0].id);
}

#[test]
fn search_filters_without_mutating_the_input() {
    let documents = compose(Stage::Senior, &catalog().documents);
    let before = documents.clone();

    let hits = search(&documents, "tax", &TEXT_FIELDS);
    assert!(hits.iter().any(|d| d.id == "pan-card"));
    assert!(hits.iter().all(|d| d.id != "passport"));
    assert_eq!(documents, before);
}

#[test]
fn guide_lookup_by_unknown_id_fails() {
    let catalog = catalog();
    catalog.guide("citizenship").unwrap();
    let err = catalog.guide("telex-permit").unwrap_err();
    assert_eq!(err.to_string(), "guide not found: telex-permit");
}

#[test]
fn office_search_covers_offered_services() {
    let catalog = catalog();
    let fields = [
        SearchField::Title,
        SearchField::Address,
        SearchField::Services,
    ];

    let by_service = search(&catalog.offices, "vaccination", &fields);
    assert_eq!(by_service.len(), 1);
    assert_eq!(by_service[0].id, "civil-hospital");

    let by_address = search(&catalog.offices, "lalitpur", &fields);
    assert_eq!(by_address.len(), 1);
    assert_eq!(by_address[0].id, "transport-dept");
}

#[test]
fn resource_library_filters_compose_with_search() {
    let catalog = catalog();

    let nepali = in_language(&catalog.resources, Some(Language::Ne));
    assert_eq!(nepali.len(), 1);

    let articles = of_kind(&catalog.resources, ResourceKind::Article);
    assert_eq!(articles.len(), 2);

    let hits = search(&articles, "citizenship", &TEXT_FIELDS);
    assert_eq!(hits.len(), 1, "Nepali article matches only in Nepali text");
}

#[test]
fn document_status_uses_original_wire_spelling() {
    let documents = compose(Stage::Youth, &catalog().documents);
    let citizenship = documents.iter().find(|d| d.id == "citizenship").unwrap();
    let json = serde_json::to_value(citizenship).unwrap();
    assert_eq!(json["status"], "not-started");
    assert_eq!(json["applicable_stages"][0], "youth");
}
