//! Executor traits over the persisted stores

use std::collections::BTreeSet;

use crate::index::IndexManager;
use crate::schema::Column;
use crate::storage::{EntityDocument, RecordStore, StorageBackend, StorageErrorCode};

use super::errors::ExecutorResult;
use super::executor::{IndexLookup, RecordSource};

impl<B: StorageBackend> IndexLookup for IndexManager<B> {
    fn lookup(&self, column: Column, value: &str) -> ExecutorResult<BTreeSet<String>> {
        Ok(IndexManager::lookup(self, column, value)?)
    }
}

impl<B: StorageBackend> RecordSource for RecordStore<B> {
    fn entity_ids(&self) -> ExecutorResult<BTreeSet<String>> {
        Ok(self.list_all_entity_ids()?)
    }

    fn document(&self, stb: &str) -> ExecutorResult<Option<EntityDocument>> {
        match self.get(stb) {
            Ok(doc) => Ok(Some(doc)),
            // An id that cannot name a document has no rows
            Err(e) if e.is_not_found() || e.code() == StorageErrorCode::StbStorageInvalidKey => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
