//! Document key rules
//!
//! Entity documents are keyed by the entity id. Column indexes are keyed by
//! `<column>_index`. Both share one key space, so entity ids may not take an
//! index key.

use crate::schema::Column;

use super::errors::{StorageError, StorageResult};

/// Suffix appended to a column name to form its index document key
pub const INDEX_KEY_SUFFIX: &str = "_index";

/// Returns the document key of a column's index
pub fn index_key(column: Column) -> String {
    format!("{}{}", column.as_str(), INDEX_KEY_SUFFIX)
}

/// Returns true if `key` names one of the column index documents
pub fn is_index_key(key: &str) -> bool {
    Column::INDEXED.iter().any(|c| index_key(*c) == key)
}

/// Rejects keys that cannot safely name a single document
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::invalid_key(key, "Key must not be empty"));
    }
    if key == "." || key == ".." {
        return Err(StorageError::invalid_key(key, "Key must not be a relative path"));
    }
    if key.contains(['/', '\\', '\0']) {
        return Err(StorageError::invalid_key(
            key,
            "Key must not contain path separators",
        ));
    }
    Ok(())
}

/// Rejects entity ids that are not valid keys or that collide with an index
pub fn validate_entity_key(stb: &str) -> StorageResult<()> {
    validate_key(stb)?;
    if is_index_key(stb) {
        return Err(StorageError::invalid_key(
            stb,
            "Entity id collides with a column index document",
        ));
    }
    Ok(())
}
