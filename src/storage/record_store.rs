//! Record Store: one persisted document per entity
//!
//! # API
//!
//! - `put(event)` - read-modify-write of the entity's document
//! - `get(stb)` - full document, or `STB_STORAGE_NOT_FOUND`
//! - `list_all_entity_ids()` - every entity with a document

use std::collections::BTreeSet;

use crate::schema::Event;

use super::backend::StorageBackend;
use super::documents::DocumentStore;
use super::errors::{StorageError, StorageResult};
use super::keys::{is_index_key, validate_entity_key};
use super::record::{EntityDocument, Viewing};

/// Persists entity documents keyed by entity id
#[derive(Debug, Clone)]
pub struct RecordStore<B: StorageBackend> {
    documents: DocumentStore<B>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Creates a record store over a backend
    pub fn new(backend: B) -> Self {
        Self {
            documents: DocumentStore::new(backend),
        }
    }

    /// Inserts or overwrites the (date, title) slot of the event's entity.
    ///
    /// Loads the existing document (or starts an empty one), applies the
    /// event and rewrites the whole document. Returns the viewing the slot
    /// held before, if any.
    pub fn put(&self, event: &Event) -> StorageResult<Option<Viewing>> {
        validate_entity_key(&event.stb)?;

        let mut document = match self.documents.load::<EntityDocument>(&event.stb)? {
            Some(doc) => Self::check_owner(&event.stb, doc)?,
            None => EntityDocument::new(event.stb.clone()),
        };

        let previous = document.upsert(event);
        self.documents.save(&event.stb, &document)?;
        Ok(previous)
    }

    /// Returns the entity's document.
    ///
    /// Fails with `STB_STORAGE_NOT_FOUND` if the entity was never written and
    /// with `STB_DATA_CORRUPTION` if the document cannot be decoded.
    pub fn get(&self, stb: &str) -> StorageResult<EntityDocument> {
        validate_entity_key(stb)?;

        match self.documents.load::<EntityDocument>(stb)? {
            Some(doc) => Self::check_owner(stb, doc),
            None => Err(StorageError::not_found(stb)),
        }
    }

    /// Returns true if the entity has a document
    pub fn contains(&self, stb: &str) -> StorageResult<bool> {
        if validate_entity_key(stb).is_err() {
            return Ok(false);
        }
        self.documents.exists(stb)
    }

    /// Returns the id of every entity with a document.
    ///
    /// This is a full listing of the data directory and grows with the store.
    pub fn list_all_entity_ids(&self) -> StorageResult<BTreeSet<String>> {
        Ok(self
            .documents
            .keys()?
            .into_iter()
            .filter(|key| !is_index_key(key))
            .collect())
    }

    /// A document stored under one id must describe that id
    fn check_owner(stb: &str, document: EntityDocument) -> StorageResult<EntityDocument> {
        if document.stb != stb {
            return Err(StorageError::corruption_for_document(
                stb,
                format!("Document belongs to entity '{}'", document.stb),
            ));
        }
        Ok(document)
    }
}
