//! Index Determinism Tests
//!
//! Tests for index invariants:
//! - Recording is idempotent and monotonic
//! - Lookups return ids sorted ascending, whatever the insertion order
//! - Unknown columns and values look up as empty sets
//! - Every ingested event lands in the index of each indexed column

use std::collections::BTreeSet;
use std::io::Cursor;

use stbdb::index::IndexManager;
use stbdb::schema::Column;
use stbdb::storage::{LocalBackend, MemoryBackend, StorageErrorCode};
use stbdb::Datastore;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn ids(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Recording
// =============================================================================

/// Recording the same entry twice reports one addition.
#[test]
fn test_record_is_idempotent() {
    let manager = IndexManager::new(MemoryBackend::new());

    assert!(manager.record(Column::Title, "Titanic", "stb1").unwrap());
    assert!(!manager.record(Column::Title, "Titanic", "stb1").unwrap());

    assert_eq!(manager.lookup(Column::Title, "Titanic").unwrap(), ids(&["stb1"]));
}

/// Lookup order does not depend on insertion order.
#[test]
fn test_lookup_sorted_regardless_of_insertion_order() {
    let forward = IndexManager::new(MemoryBackend::new());
    let backward = IndexManager::new(MemoryBackend::new());

    for stb in ["stb1", "stb2", "stb3"] {
        forward.record(Column::Provider, "MGM", stb).unwrap();
    }
    for stb in ["stb3", "stb2", "stb1"] {
        backward.record(Column::Provider, "MGM", stb).unwrap();
    }

    let a: Vec<_> = forward.lookup(Column::Provider, "MGM").unwrap().into_iter().collect();
    let b: Vec<_> = backward.lookup(Column::Provider, "MGM").unwrap().into_iter().collect();
    assert_eq!(a, vec!["stb1", "stb2", "stb3"]);
    assert_eq!(a, b);
}

/// A column never written and a value never seen are both empty.
#[test]
fn test_lookup_missing_is_empty() {
    let manager = IndexManager::new(MemoryBackend::new());
    assert!(manager.lookup(Column::Date, "2017-04-01").unwrap().is_empty());

    manager.record(Column::Date, "2017-04-01", "stb1").unwrap();
    assert!(manager.lookup(Column::Date, "2017-04-02").unwrap().is_empty());
}

/// The entity id column has no index document.
#[test]
fn test_stb_column_has_no_index() {
    let manager = IndexManager::new(MemoryBackend::new());

    let err = manager.record(Column::Stb, "stb1", "stb1").unwrap_err();
    assert_eq!(err.code(), StorageErrorCode::StbStorageInvalidKey);
}

/// Indexes survive reopening the data directory.
#[test]
fn test_index_persisted_on_disk() {
    let temp_dir = TempDir::new().unwrap();

    {
        let manager = IndexManager::new(LocalBackend::new(temp_dir.path()));
        manager.record(Column::Rev, "6.00", "stb2").unwrap();
        manager.record(Column::Rev, "6.00", "stb1").unwrap();
    }

    let manager = IndexManager::new(LocalBackend::new(temp_dir.path()));
    assert_eq!(manager.lookup(Column::Rev, "6.00").unwrap(), ids(&["stb1", "stb2"]));

    let index = manager.load(Column::Rev).unwrap();
    assert_eq!(index.len(), 1);
}

// =============================================================================
// Ingestion Coverage
// =============================================================================

/// Every event value is findable through every indexed column.
#[test]
fn test_every_event_indexed_on_every_column() {
    let store = Datastore::in_memory();
    let lines = "\
stb1|Titanic|Paramount|2017-04-01|6.00|12:30
stb2|Alien|MGM|2017-04-02|4.00|20:00
stb3|Titanic|Fox|2017-04-02|6.00|09:15
";
    store.import(Cursor::new(lines)).unwrap();

    let ids_in_records = store.records().list_all_entity_ids().unwrap();
    for stb in &ids_in_records {
        let document = store.records().get(stb).unwrap();
        for event in document.events() {
            for column in Column::INDEXED {
                let found = store.indexes().lookup(column, event.get(column)).unwrap();
                assert!(found.contains(stb), "{} missing from {} index", stb, column);
            }
        }
    }

    assert_eq!(
        store.indexes().lookup(Column::Date, "2017-04-02").unwrap(),
        ids(&["stb2", "stb3"])
    );
}

/// Indexes are monotonic: overwriting an event leaves the old values listed.
#[test]
fn test_index_is_monotonic() {
    let store = Datastore::in_memory();
    store
        .import(Cursor::new(
            "stb1|Titanic|Paramount|2017-04-01|6.00|12:30\nstb1|Titanic|Fox|2017-04-01|8.00|21:00\n",
        ))
        .unwrap();

    let providers = store.indexes().load(Column::Provider).unwrap();
    assert_eq!(providers.get("Paramount"), Some(&ids(&["stb1"])));
    assert_eq!(providers.get("Fox"), Some(&ids(&["stb1"])));
}
