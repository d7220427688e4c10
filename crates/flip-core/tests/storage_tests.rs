// Rust guideline compliant 2026-08-05

//! Unit tests for the storage module.
//!
//! These tests validate load fail-soft behavior, seeding, mutation
//! operations, and the file-backed persistence format.

use flip_core::{FileVault, MemoryVault, Notifier, Persistence, Store, STORAGE_KEY};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

/// Notifier that records every message for inspection.
#[derive(Clone, Default)]
struct Recorder {
    warns: Rc<RefCell<Vec<String>>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl Notifier for Recorder {
    fn warn(&self, message: &str) {
        self.warns.borrow_mut().push(message.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

#[test]
fn test_missing_key_loads_empty() {
    let recorder = Recorder::default();
    let store = Store::open(MemoryVault::new(), &recorder);

    assert!(store.is_empty());
    assert!(recorder.warns.borrow().is_empty(), "No warning for absence");
}

#[test]
fn test_corrupt_blob_loads_empty_with_warning() {
    let recorder = Recorder::default();
    let vault = MemoryVault::with_value(STORAGE_KEY, "not json at all {{{");
    let store = Store::open(vault, &recorder);

    assert!(store.is_empty());
    assert_eq!(recorder.warns.borrow().len(), 1, "Exactly one warning");
}

#[test]
fn test_non_array_blob_loads_empty_with_warning() {
    let recorder = Recorder::default();
    let vault = MemoryVault::with_value(STORAGE_KEY, r#"{"id":"card-00000000"}"#);
    let store = Store::open(vault, &recorder);

    assert!(store.is_empty());
    assert_eq!(recorder.warns.borrow().len(), 1);
}

#[test]
fn test_legacy_collection_loads_unchanged() {
    // Format written by earlier versions: camelCase fields, timestamp ids.
    let raw = r#"[
        {"id":"1700000000000","question":"What is the capital of France?","answer":"Paris","createdAt":1700000000000,"updatedAt":1700000000000},
        {"id":"1700000000001","question":"2 + 2 = ?","answer":"4","createdAt":1700000000000,"updatedAt":1700000000500}
    ]"#;
    let recorder = Recorder::default();
    let store = Store::open(MemoryVault::with_value(STORAGE_KEY, raw), &recorder);

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(0).expect("card 0").id, "1700000000000");
    assert_eq!(store.get(1).expect("card 1").answer, "4");
    assert_eq!(store.get(1).expect("card 1").updated_at, 1700000000500);
    assert!(recorder.warns.borrow().is_empty());
}

#[test]
fn test_invalid_cards_skipped_on_load() {
    let raw = r#"[
        {"id":"a1","question":"Q","answer":"A","createdAt":1,"updatedAt":1},
        {"id":"a2","question":"  ","answer":"A","createdAt":1,"updatedAt":1}
    ]"#;
    let recorder = Recorder::default();
    let store = Store::open(MemoryVault::with_value(STORAGE_KEY, raw), &recorder);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).expect("card").id, "a1");
    assert_eq!(recorder.warns.borrow().len(), 1);
}

#[test]
fn test_duplicate_ids_skipped_on_load() {
    let raw = r#"[
        {"id":"a1","question":"Q1","answer":"A1","createdAt":1,"updatedAt":1},
        {"id":"a1","question":"Q2","answer":"A2","createdAt":2,"updatedAt":2}
    ]"#;
    let recorder = Recorder::default();
    let store = Store::open(MemoryVault::with_value(STORAGE_KEY, raw), &recorder);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).expect("card").question, "Q1");
    assert_eq!(recorder.warns.borrow().len(), 1);
}

#[test]
fn test_round_trip_save_load() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);
    store.add("Q1", "A1").expect("Failed to add");
    store.add("Q2", "A2").expect("Failed to add");

    let reopened = Store::open(store.backend().clone(), &recorder);
    assert_eq!(reopened.cards(), store.cards());
}

#[test]
fn test_seed_if_empty_creates_three_cards() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);

    let seeded = store.seed_if_empty().expect("Failed to seed");
    assert!(seeded);
    assert_eq!(store.len(), 3);
    assert_eq!(
        store.get(0).expect("card").question,
        "What is the capital of France?"
    );
    assert_eq!(store.get(2).expect("card").answer, "4");

    // Seeded collection must already be persisted.
    let reopened = Store::open(store.backend().clone(), &recorder);
    assert_eq!(reopened.len(), 3);
}

#[test]
fn test_seed_noop_on_nonempty_collection() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);
    store.add("Q", "A").expect("Failed to add");

    let seeded = store.seed_if_empty().expect("Failed to seed");
    assert!(!seeded);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_seed_ids_are_unique() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);
    store.seed_if_empty().expect("Failed to seed");

    let mut ids: Vec<&str> = store.cards().iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3, "Seed ids must not collide");
}

#[test]
fn test_add_appends_and_returns_index() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);

    let first = store.add("Q1", "A1").expect("Failed to add");
    let second = store.add("Q2", "A2").expect("Failed to add");

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(1).expect("card").question, "Q2");
}

#[test]
fn test_add_trims_fields() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);

    store.add("  Q  ", "\tA\n").expect("Failed to add");
    let card = store.get(0).expect("card");
    assert_eq!(card.question, "Q");
    assert_eq!(card.answer, "A");
}

#[test]
fn test_add_rejects_blank_fields() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);

    assert!(store.add("", "A").is_err());
    assert!(store.add("Q", "   ").is_err());
    assert!(store.is_empty(), "Rejected adds must not mutate");
}

#[test]
fn test_update_preserves_identity() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);
    store.add("Q", "A").expect("Failed to add");

    let before = store.get(0).expect("card").clone();
    store.update(0, "Q2", "A2").expect("Failed to update");
    let after = store.get(0).expect("card");

    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.question, "Q2");
    assert_eq!(after.answer, "A2");
    assert!(after.updated_at >= before.updated_at);
}

#[test]
fn test_update_out_of_range() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);
    store.add("Q", "A").expect("Failed to add");

    assert!(store.update(1, "Q2", "A2").is_err());
    assert_eq!(store.get(0).expect("card").question, "Q");
}

#[test]
fn test_remove_deletes_in_order() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);
    store.add("Q1", "A1").expect("Failed to add");
    store.add("Q2", "A2").expect("Failed to add");
    store.add("Q3", "A3").expect("Failed to add");

    store.remove(1).expect("Failed to remove");

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(0).expect("card").question, "Q1");
    assert_eq!(store.get(1).expect("card").question, "Q3");
}

#[test]
fn test_remove_out_of_range() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);

    assert!(store.remove(0).is_err());
}

#[test]
fn test_mutations_persist_immediately() {
    let recorder = Recorder::default();
    let mut store = Store::open(MemoryVault::new(), &recorder);

    store.add("Q1", "A1").expect("Failed to add");
    assert_eq!(Store::open(store.backend().clone(), &recorder).len(), 1);

    store.update(0, "Q1b", "A1b").expect("Failed to update");
    let reopened = Store::open(store.backend().clone(), &recorder);
    assert_eq!(reopened.get(0).expect("card").question, "Q1b");

    store.remove(0).expect("Failed to remove");
    assert!(Store::open(store.backend().clone(), &recorder).is_empty());
}

#[test]
fn test_file_vault_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let recorder = Recorder::default();

    {
        let vault = FileVault::new(temp_dir.path().to_path_buf()).expect("Failed to open vault");
        let mut store = Store::open(vault, &recorder);
        store.add("Q1", "A1").expect("Failed to add");
        store.add("Q2", "A2").expect("Failed to add");
    }

    let vault = FileVault::new(temp_dir.path().to_path_buf()).expect("Failed to open vault");
    let store = Store::open(vault, &recorder);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(1).expect("card").answer, "A2");
}

#[test]
fn test_file_vault_stores_json_array() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let recorder = Recorder::default();

    let vault = FileVault::new(temp_dir.path().to_path_buf()).expect("Failed to open vault");
    let mut store = Store::open(vault, &recorder);
    store.add("Q", "A").expect("Failed to add");

    let content = fs::read_to_string(temp_dir.path().join(STORAGE_KEY))
        .expect("Storage file should exist under the storage key");
    let value: serde_json::Value = serde_json::from_str(&content).expect("Valid JSON");
    assert!(value.is_array(), "Collection serializes as a JSON array");
    assert_eq!(value.as_array().expect("array").len(), 1);
    assert!(content.contains("createdAt"), "Fields are camelCase");
}

#[test]
fn test_file_vault_corrupt_file_recovers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join(STORAGE_KEY), "][ garbage").expect("Failed to write");

    let recorder = Recorder::default();
    let vault = FileVault::new(temp_dir.path().to_path_buf()).expect("Failed to open vault");
    let mut store = Store::open(vault, &recorder);

    assert!(store.is_empty());
    assert_eq!(recorder.warns.borrow().len(), 1);

    // The store still works after recovery.
    store.add("Q", "A").expect("Failed to add");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_file_vault_missing_key_reads_none() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let vault = FileVault::new(temp_dir.path().to_path_buf()).expect("Failed to open vault");

    let value = vault.read("nothing-here").expect("Read should not fail");
    assert!(value.is_none());
}

#[test]
fn test_file_vault_write_overwrites() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut vault = FileVault::new(temp_dir.path().to_path_buf()).expect("Failed to open vault");

    vault.write("key", "first").expect("Failed to write");
    vault.write("key", "second").expect("Failed to write");

    assert_eq!(vault.read("key").expect("read").as_deref(), Some("second"));
}

#[test]
fn test_file_vault_empty_dir_rejected() {
    let result = FileVault::new(std::path::PathBuf::new());
    assert!(result.is_err(), "Empty data directory should fail");
}

#[test]
fn test_lock_can_be_reacquired_after_drop() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let vault = FileVault::new(temp_dir.path().to_path_buf()).expect("Failed to open vault");

    {
        let _lock = vault.lock_exclusive().expect("Failed to acquire lock");
    }

    let _lock = vault
        .lock_exclusive()
        .expect("Lock should be released and reacquirable");
}
