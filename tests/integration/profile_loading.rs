use portfolio_assistant::chat::QueryRouter;
use portfolio_assistant::profile::{ProfileLoader, ProfileSource, ProfileStore};
use std::sync::Arc;

use super::IntegrationHarness;
use crate::support::profile_fixture::{sample_profile, SAMPLE_PROFILE_JSON};

#[test]
fn background_load_installs_document() {
    let harness = IntegrationHarness::new();
    let path = harness.write_file("data/data.json", SAMPLE_PROFILE_JSON);
    let store = Arc::new(ProfileStore::new());

    let handle = ProfileLoader::new(ProfileSource::file(&path))
        .spawn(Arc::clone(&store))
        .expect("loader thread should start");
    assert!(handle.join().expect("loader thread panicked"));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.document, sample_profile());
    assert!(snapshot.fingerprint.is_some());
    assert!(snapshot.loaded_at.is_some());
}

#[test]
fn malformed_document_leaves_empty_snapshot() {
    let harness = IntegrationHarness::new();
    let path = harness.write_file("data/data.json", "{ \"skills\": [");
    let store = ProfileStore::new();

    assert!(!ProfileLoader::new(ProfileSource::file(&path)).load_into(&store));

    let snapshot = store.snapshot();
    assert!(snapshot.document.is_empty());
    assert_eq!(
        QueryRouter::new().answer("skills", &snapshot.document),
        "Unable to load skills data."
    );
}

#[test]
fn wrong_field_type_is_a_parse_failure() {
    let harness = IntegrationHarness::new();
    let path = harness.write_file("profile.json", r#"{ "projects": "not a list" }"#);
    let err = ProfileLoader::new(ProfileSource::file(&path))
        .read_snapshot()
        .expect_err("string where a list is expected must fail");
    assert!(format!("{err:#}").contains("Failed parsing profile document"));
}

#[test]
fn partial_document_answers_what_it_has() {
    let harness = IntegrationHarness::new();
    let path = harness.write_file("partial.yml", "projects:\n  - Portfolio\n");
    let store = ProfileStore::new();
    assert!(ProfileLoader::new(ProfileSource::file(&path)).load_into(&store));

    let snapshot = store.snapshot();
    let router = QueryRouter::new();
    assert_eq!(
        router.answer("projects", &snapshot.document),
        "Here are the projects Ankur has worked on:\nPortfolio"
    );
    assert_eq!(
        router.answer("education", &snapshot.document),
        "Education details not available."
    );
}

#[test]
fn reload_keeps_fingerprint_for_identical_bytes() {
    let harness = IntegrationHarness::new();
    let path = harness.write_file("data.json", SAMPLE_PROFILE_JSON);
    let loader = ProfileLoader::new(ProfileSource::file(&path));
    let first = loader.read_snapshot().unwrap();
    let second = loader.read_snapshot().unwrap();
    assert_eq!(first.fingerprint, second.fingerprint);
}
