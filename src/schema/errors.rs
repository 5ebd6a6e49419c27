//! # Schema Errors

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while parsing columns and ingestion lines.
///
/// These never reach the storage core: the loader skips malformed lines
/// and the CLI rejects unknown columns before a query is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Expected 6 fields, found {0}")]
    FieldCount(usize),

    #[error("Missing box id")]
    MissingStb,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid revenue: {0}")]
    InvalidRevenue(String),
}
