//! Index Manager for stbdb
//!
//! Maintains one persisted index document per indexable column.
//!
//! # API
//!
//! - `record(column, value, stb)` - add an entity under a value
//! - `lookup(column, value)` - entity ids recorded under a value
//! - `load(column)` - the whole index of a column
//!
//! Entries are never removed. When a re-ingested event changes a value, the
//! entity stays listed under the old value as well.

use std::collections::{BTreeMap, BTreeSet};

use crate::schema::Column;
use crate::storage::{index_key, DocumentStore, StorageBackend, StorageError, StorageResult};

/// value -> ids of the entities with at least one event carrying it
pub type ColumnIndex = BTreeMap<String, BTreeSet<String>>;

/// Persists and queries the column indexes
#[derive(Debug, Clone)]
pub struct IndexManager<B: StorageBackend> {
    documents: DocumentStore<B>,
}

impl<B: StorageBackend> IndexManager<B> {
    /// Creates an index manager over a backend
    pub fn new(backend: B) -> Self {
        Self {
            documents: DocumentStore::new(backend),
        }
    }

    /// Records that entity `stb` has an event whose `column` equals `value`.
    ///
    /// Idempotent. The index document is rewritten only when the entity was
    /// not already listed. Returns true if the entry was added.
    pub fn record(&self, column: Column, value: &str, stb: &str) -> StorageResult<bool> {
        let key = Self::key_for(column)?;
        let mut index = self.documents.load::<ColumnIndex>(&key)?.unwrap_or_default();

        let added = index
            .entry(value.to_string())
            .or_default()
            .insert(stb.to_string());

        if added {
            self.documents.save(&key, &index)?;
        }
        Ok(added)
    }

    /// Returns the entities recorded under `value`.
    ///
    /// A column that was never written and a value that was never seen both
    /// yield an empty set.
    pub fn lookup(&self, column: Column, value: &str) -> StorageResult<BTreeSet<String>> {
        let key = Self::key_for(column)?;
        let Some(mut index) = self.documents.load::<ColumnIndex>(&key)? else {
            return Ok(BTreeSet::new());
        };
        Ok(index.remove(value).unwrap_or_default())
    }

    /// Returns the whole index of a column (empty if never written)
    pub fn load(&self, column: Column) -> StorageResult<ColumnIndex> {
        let key = Self::key_for(column)?;
        Ok(self.documents.load::<ColumnIndex>(&key)?.unwrap_or_default())
    }

    fn key_for(column: Column) -> StorageResult<String> {
        if !column.is_indexed() {
            return Err(StorageError::invalid_key(
                column.as_str(),
                "Column has no index",
            ));
        }
        Ok(index_key(column))
    }
}
