//! # In-Memory Backend
//!
//! Keeps documents in a shared map. Clones share the same documents, the
//! way two handles on one data directory would.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::backend::StorageBackend;
use super::errors::{StorageError, StorageResult};
use super::keys::validate_key;

/// In-memory storage backend
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    documents: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StorageError {
        StorageError::write_failed_no_source("Memory backend lock poisoned")
    }
}

impl StorageBackend for MemoryBackend {
    fn write(&self, key: &str, data: &[u8]) -> StorageResult<()> {
        validate_key(key)?;
        let mut documents = self.documents.write().map_err(|_| Self::poisoned())?;
        documents.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        validate_key(key)?;
        let documents = self.documents.read().map_err(|_| Self::poisoned())?;
        documents
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::not_found(key))
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;
        let documents = self.documents.read().map_err(|_| Self::poisoned())?;
        Ok(documents.contains_key(key))
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let documents = self.documents.read().map_err(|_| Self::poisoned())?;
        Ok(documents.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_documents() {
        let backend = MemoryBackend::new();
        let other = backend.clone();

        backend.write("stb1", b"{}").unwrap();
        assert_eq!(other.read("stb1").unwrap(), b"{}");
        assert_eq!(other.list().unwrap(), vec!["stb1"]);
    }

    #[test]
    fn test_not_found() {
        let backend = MemoryBackend::new();
        assert!(backend.read("stb1").unwrap_err().is_not_found());
        assert!(!backend.exists("stb1").unwrap());
    }
}
