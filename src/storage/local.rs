//! # Local Filesystem Backend
//!
//! Each document is one `<key>.json` file directly under the data directory.
//! The directory is created on first write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::backend::StorageBackend;
use super::errors::{StorageError, StorageResult};
use super::keys::validate_key;

/// File extension of every persisted document
pub const DOCUMENT_EXTENSION: &str = "json";

/// Local filesystem storage backend
#[derive(Debug, Clone)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    /// Create a new local backend rooted at `root`.
    ///
    /// Nothing is touched on disk until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file path of a document
    pub fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{}", key, DOCUMENT_EXTENSION))
    }
}

impl StorageBackend for LocalBackend {
    fn write(&self, key: &str, data: &[u8]) -> StorageResult<()> {
        validate_key(key)?;

        fs::create_dir_all(&self.root).map_err(|e| {
            StorageError::write_failed(
                format!("Failed to create data directory: {}", self.root.display()),
                e,
            )
        })?;

        let path = self.document_path(key);
        fs::write(&path, data).map_err(|e| {
            StorageError::write_failed(format!("Failed to write {}", path.display()), e)
        })
    }

    fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        validate_key(key)?;

        let path = self.document_path(key);
        fs::read(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StorageError::not_found(key)
            } else {
                StorageError::read_failed(format!("Failed to read {}", path.display()), e)
            }
        })
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;
        Ok(self.document_path(key).is_file())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            // No data directory yet means no documents
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::io_error(
                    format!("Failed to list {}", self.root.display()),
                    e,
                ))
            }
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                StorageError::io_error(format!("Failed to list {}", self.root.display()), e)
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }
}
