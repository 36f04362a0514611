use std::fs;
use std::time::Duration;

use tempfile::tempdir;
use worldcal_events::{Comment, DateKey, Event, EventMap};
use worldcal_store::{CalendarDocument, DocumentStore, RetryPolicy, SaveOutcome, StoreError};

fn fast_retry() -> RetryPolicy {
    RetryPolicy::new(1).with_base_delay(Duration::from_millis(1))
}

fn sample_document() -> CalendarDocument {
    let mut events = EventMap::new();
    let key = DateKey::new(0, 1, 1);
    let mut event = Event::new("Trade hall opening", "alex", "Bring emeralds");
    event.push_comment(Comment::new("sam", "see you there"));
    events.add_event(key, event);
    events.add_event(key, Event::new("Night patrol", "kit", "After dusk"));
    CalendarDocument { events }
}

#[test]
fn save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let store = DocumentStore::new(dir.path().join("data.json"), dir.path().join("cache.json"))
        .with_retry(fast_retry());

    let doc = sample_document();
    assert_eq!(store.save(&doc).unwrap(), SaveOutcome::Persisted);

    let loaded = store.load().unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn load_without_documents_starts_empty() {
    let dir = tempdir().unwrap();
    let store = DocumentStore::new(dir.path().join("data.json"), dir.path().join("cache.json"));
    let doc = store.load().unwrap();
    assert!(doc.events.is_empty());
}

#[test]
fn load_falls_back_to_cache() {
    let dir = tempdir().unwrap();
    let primary = dir.path().join("data.json");
    let store =
        DocumentStore::new(&primary, dir.path().join("cache.json")).with_retry(fast_retry());

    let doc = sample_document();
    store.save(&doc).unwrap();
    fs::remove_file(&primary).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn save_falls_back_to_cache_when_primary_unwritable() {
    let dir = tempdir().unwrap();
    // The primary's parent "directory" is a regular file, so every
    // primary write attempt fails.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let store = DocumentStore::new(blocker.join("data.json"), dir.path().join("cache.json"))
        .with_retry(fast_retry());

    let doc = sample_document();
    assert_eq!(store.save(&doc).unwrap(), SaveOutcome::LocalOnly);

    // The cache alone now serves the load.
    let loaded = store.load().unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn save_errors_when_cache_also_unwritable() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let store = DocumentStore::new(blocker.join("data.json"), blocker.join("cache.json"))
        .with_retry(fast_retry());

    let err = store.save(&sample_document()).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
}

#[test]
fn malformed_document_is_an_error() {
    let dir = tempdir().unwrap();
    let primary = dir.path().join("data.json");
    fs::write(&primary, b"{ not json").unwrap();
    let store = DocumentStore::new(&primary, dir.path().join("cache.json"));

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
}

#[test]
fn missing_events_field_defaults_to_empty() {
    let dir = tempdir().unwrap();
    let primary = dir.path().join("data.json");
    fs::write(&primary, b"{}").unwrap();
    let store = DocumentStore::new(&primary, dir.path().join("cache.json"));

    let doc = store.load().unwrap();
    assert!(doc.events.is_empty());
}

#[test]
fn successful_save_refreshes_cache() {
    let dir = tempdir().unwrap();
    let cache = dir.path().join("cache.json");
    let store =
        DocumentStore::new(dir.path().join("data.json"), &cache).with_retry(fast_retry());

    store.save(&sample_document()).unwrap();
    let cached: CalendarDocument = serde_json::from_str(&fs::read_to_string(&cache).unwrap())
        .unwrap();
    assert_eq!(cached, sample_document());
}
