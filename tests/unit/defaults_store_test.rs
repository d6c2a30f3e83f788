//! Unit tests for the key-value DefaultsStore.
//!
//! Covers get/set/remove semantics, JSON value shapes, string-array helpers
//! and persistence across reopen of a file-backed database.

use std::sync::Arc;

use fooscreen::database::connection::Database;
use fooscreen::services::defaults_store::{DefaultsStore, DefaultsStoreTrait};
use fooscreen::types::errors::StoreError;
use serde_json::json;

fn setup() -> DefaultsStore {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    DefaultsStore::new(Arc::new(db))
}

#[test]
fn test_set_then_get_various_shapes() {
    let store = setup();
    store.set("flag", &json!(true)).unwrap();
    store.set("count", &json!(42)).unwrap();
    store.set("list", &json!(["a", "b"])).unwrap();
    store.set("obj", &json!({"x": 1})).unwrap();

    assert_eq!(store.get("flag").unwrap(), Some(json!(true)));
    assert_eq!(store.get("count").unwrap(), Some(json!(42)));
    assert_eq!(store.get("list").unwrap(), Some(json!(["a", "b"])));
    assert_eq!(store.get("obj").unwrap(), Some(json!({"x": 1})));
}

#[test]
fn test_remove_makes_key_absent() {
    let store = setup();
    store.set("k", &json!("v")).unwrap();
    assert!(store.contains("k").unwrap());

    store.remove("k").unwrap();
    assert!(!store.contains("k").unwrap());
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_remove_missing_key_is_ok() {
    let store = setup();
    assert!(store.remove("never-set").is_ok());
}

#[test]
fn test_string_array_helpers() {
    let store = setup();
    assert_eq!(store.get_string_array("urls").unwrap(), None);

    let urls = vec!["http://a".to_string(), "http://b".to_string()];
    store.set_string_array("urls", &urls).unwrap();
    assert_eq!(store.get_string_array("urls").unwrap(), Some(urls));
}

#[test]
fn test_string_array_rejects_mixed_array() {
    let store = setup();
    store.set("urls", &json!(["http://a", 3])).unwrap();
    match store.get_string_array("urls") {
        Err(StoreError::TypeMismatch(key)) => assert_eq!(key, "urls"),
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_clones_share_storage() {
    let a = setup();
    let b = a.clone();
    a.set("shared", &json!(1)).unwrap();
    assert_eq!(b.get("shared").unwrap(), Some(json!(1)));
}

#[test]
fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fooscreen.db");
    {
        let store = DefaultsStore::new(Arc::new(Database::open(&path).unwrap()));
        store
            .set_string_array("history", &["http://kept".to_string()])
            .unwrap();
    }
    let store = DefaultsStore::new(Arc::new(Database::open(&path).unwrap()));
    assert_eq!(
        store.get_string_array("history").unwrap(),
        Some(vec!["http://kept".to_string()])
    );
}
