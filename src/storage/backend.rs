//! # Storage Backend Trait

use super::errors::StorageResult;

/// Byte-level document backend.
///
/// Every document is addressed by a flat key and is always read and written
/// whole. There is no partial update and no cross-document transaction.
pub trait StorageBackend: Send + Sync + std::fmt::Debug {
    /// Write the full contents of the document at `key`, replacing it
    fn write(&self, key: &str, data: &[u8]) -> StorageResult<()>;

    /// Read the full contents of the document at `key`.
    ///
    /// Returns `STB_STORAGE_NOT_FOUND` if the document was never written.
    fn read(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Check if a document exists
    fn exists(&self, key: &str) -> StorageResult<bool>;

    /// List the keys of every stored document, sorted
    fn list(&self) -> StorageResult<Vec<String>>;
}
