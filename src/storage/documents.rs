//! Typed load/save over a storage backend
//!
//! Every document is JSON. A load is a whole-file read followed by a parse;
//! a save is a whole-file serialize followed by a rewrite.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::StorageBackend;
use super::errors::{StorageError, StorageResult};

/// JSON document store over a backend
#[derive(Debug, Clone)]
pub struct DocumentStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> DocumentStore<B> {
    /// Wrap a backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load and decode the document at `key`.
    ///
    /// Returns `Ok(None)` if the document does not exist. A document that
    /// exists but does not decode is `STB_DATA_CORRUPTION`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let bytes = match self.backend.read(key) {
            Ok(bytes) => bytes,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StorageError::corruption_for_document(key, e.to_string()))
    }

    /// Encode and persist the whole document at `key`
    pub fn save<T: Serialize>(&self, key: &str, document: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(document).map_err(|e| {
            StorageError::write_failed_no_source(format!("Failed to encode {}: {}", key, e))
        })?;
        self.backend.write(key, &bytes)
    }

    /// Check if a document exists
    pub fn exists(&self, key: &str) -> StorageResult<bool> {
        self.backend.exists(key)
    }

    /// List every document key, sorted
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        self.backend.list()
    }
}
