//! # Ingestion Errors

use std::io;

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that stop an ingestion.
///
/// Malformed lines are not errors here: the loader skips and counts them.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl IngestError {
    /// Returns the underlying storage error, if any
    pub fn storage(&self) -> Option<&StorageError> {
        match self {
            IngestError::Storage(e) => Some(e),
            IngestError::Read { .. } => None,
        }
    }
}
