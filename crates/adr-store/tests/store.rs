//! Store behavior over real reports

use adr_analysis::analyze;
use adr_store::{AnalysisId, DocumentType, InMemoryStore, Provenance, ReportStore};
use adr_test_utils::{COMPLETE_ADR, TITLE_ONLY_ADR};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::sync::Arc;
use std::thread;

fn saved(store: &InMemoryStore, text: &str, provenance: Provenance) -> AnalysisId {
    store.save(analyze(text).unwrap(), provenance).id
}

#[test]
fn round_trip_by_id() {
    let store = InMemoryStore::new();
    let provenance = Provenance::file(Path::new("docs/adr/0012-postgres.md"));
    let id = saved(&store, COMPLETE_ADR, provenance.clone());

    let record = store.get(&id).unwrap();
    assert_eq!(record.provenance, provenance);
    assert_eq!(record.report.id.as_deref(), Some(id.as_str()));
    assert_eq!(record.summary().document_type, DocumentType::Markdown);
}

#[test]
fn listing_is_newest_first_and_paginated() {
    let store = InMemoryStore::new();
    let first = saved(&store, COMPLETE_ADR, Provenance::text());
    let second = saved(&store, TITLE_ONLY_ADR, Provenance::text());
    let third = saved(&store, COMPLETE_ADR, Provenance::text());

    let page = store.list(0, 2);
    assert_eq!(page.total, 3);
    let ids: Vec<_> = page.analyses.iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids, [third, second]);

    let rest = store.list(2, 10);
    assert_eq!(rest.analyses.len(), 1);
    assert_eq!(rest.analyses[0].id, first);
    assert!(store.list(5, 10).analyses.is_empty());
}

#[test]
fn delete_then_missing() {
    let store = InMemoryStore::new();
    let id = saved(&store, TITLE_ONLY_ADR, Provenance::text());
    store.delete(&id).unwrap();
    assert!(store.get(&id).unwrap_err().is_not_found());
    assert!(store.delete(&id).unwrap_err().is_not_found());
    assert!(store.is_empty());
}

#[test]
fn unknown_id_is_not_found() {
    let store = InMemoryStore::new();
    let err = store.get(&AnalysisId::from("analysis_deadbeef")).unwrap_err();
    assert_eq!(err.to_string(), "analysis not found: analysis_deadbeef");
}

#[test]
fn summary_serializes_flat() {
    let store = InMemoryStore::new();
    let id = saved(&store, COMPLETE_ADR, Provenance::text());
    let json = serde_json::to_value(store.list(0, 1)).unwrap();
    assert_eq!(json["analyses"][0]["id"], id.as_str());
    assert_eq!(json["analyses"][0]["document_type"], "text");
    assert!(json["analyses"][0]["file_name"].is_null());
    let record = serde_json::to_value(store.get(&id).unwrap()).unwrap();
    assert_eq!(record["document_type"], "text");
}

#[test]
fn concurrent_saves_get_distinct_ids() {
    let store = Arc::new(InMemoryStore::new());
    let report = analyze(TITLE_ONLY_ADR).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let report = report.clone();
            thread::spawn(move || store.save(report, Provenance::text()).id)
        })
        .collect();
    let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);
    assert_eq!(store.len(), 8);
}
