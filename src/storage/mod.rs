//! Document storage subsystem for stbdb
//!
//! Holds the canonical state: one JSON document per entity, plus the column
//! index documents owned by the index manager, all under one data directory.
//!
//! # Design Principles
//!
//! - Whole-document reads and rewrites, no partial updates
//! - One backend trait so the file layout can be swapped out
//! - Decode failures are corruption and are never skipped
//! - The data directory is created on first write

mod backend;
mod documents;
mod errors;
mod keys;
mod local;
mod memory;
mod record;
mod record_store;

pub use backend::StorageBackend;
pub use documents::DocumentStore;
pub use errors::{Severity, StorageError, StorageErrorCode, StorageResult};
pub use keys::{index_key, is_index_key, validate_entity_key, validate_key, INDEX_KEY_SUFFIX};
pub use local::{LocalBackend, DOCUMENT_EXTENSION};
pub use memory::MemoryBackend;
pub use record::{EntityDocument, Viewing};
pub use record_store::RecordStore;
