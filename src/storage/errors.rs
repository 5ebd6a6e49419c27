//! Storage error types
//!
//! Error codes:
//! - STB_STORAGE_IO_ERROR (ERROR severity)
//! - STB_STORAGE_WRITE_FAILED (ERROR severity)
//! - STB_STORAGE_READ_FAILED (ERROR severity)
//! - STB_STORAGE_NOT_FOUND (ERROR severity)
//! - STB_STORAGE_INVALID_KEY (ERROR severity)
//! - STB_DATA_CORRUPTION (FATAL severity)

use std::fmt;
use std::io;

/// Severity levels for storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, process continues
    Error,
    /// The current query or import must stop
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// Disk I/O failure
    StbStorageIoError,
    /// Document write failed
    StbStorageWriteFailed,
    /// Document read failed
    StbStorageReadFailed,
    /// Document does not exist
    StbStorageNotFound,
    /// Key cannot name a document
    StbStorageInvalidKey,
    /// Persisted document cannot be decoded
    StbDataCorruption,
}

impl StorageErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StorageErrorCode::StbStorageIoError => "STB_STORAGE_IO_ERROR",
            StorageErrorCode::StbStorageWriteFailed => "STB_STORAGE_WRITE_FAILED",
            StorageErrorCode::StbStorageReadFailed => "STB_STORAGE_READ_FAILED",
            StorageErrorCode::StbStorageNotFound => "STB_STORAGE_NOT_FOUND",
            StorageErrorCode::StbStorageInvalidKey => "STB_STORAGE_INVALID_KEY",
            StorageErrorCode::StbDataCorruption => "STB_DATA_CORRUPTION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            StorageErrorCode::StbDataCorruption => Severity::Fatal,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error type with full context
#[derive(Debug)]
pub struct StorageError {
    /// Error code
    code: StorageErrorCode,
    /// Human-readable message
    message: String,
    /// Optional details about the error context
    details: Option<String>,
    /// Underlying IO error if applicable
    source: Option<io::Error>,
}

impl StorageError {
    fn new(code: StorageErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create a new storage I/O error
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            source: Some(source),
            ..Self::new(StorageErrorCode::StbStorageIoError, message)
        }
    }

    /// Create a new storage write failed error
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            source: Some(source),
            ..Self::new(StorageErrorCode::StbStorageWriteFailed, message)
        }
    }

    /// Create a storage write failed error without IO source
    pub fn write_failed_no_source(message: impl Into<String>) -> Self {
        Self::new(StorageErrorCode::StbStorageWriteFailed, message)
    }

    /// Create a new storage read failed error
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            source: Some(source),
            ..Self::new(StorageErrorCode::StbStorageReadFailed, message)
        }
    }

    /// Create a not found error for a document key
    pub fn not_found(key: &str) -> Self {
        Self {
            details: Some(format!("key: {}", key)),
            ..Self::new(StorageErrorCode::StbStorageNotFound, "Document not found")
        }
    }

    /// Create an invalid key error
    pub fn invalid_key(key: &str, reason: impl Into<String>) -> Self {
        Self {
            details: Some(format!("key: {:?}", key)),
            ..Self::new(StorageErrorCode::StbStorageInvalidKey, reason)
        }
    }

    /// Create a data corruption error with document key context
    pub fn corruption_for_document(key: &str, reason: impl Into<String>) -> Self {
        Self {
            details: Some(format!("key: {}", key)),
            ..Self::new(StorageErrorCode::StbDataCorruption, reason)
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StorageErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Returns true for a missing document
    pub fn is_not_found(&self) -> bool {
        self.code == StorageErrorCode::StbStorageNotFound
    }

    /// Returns whether this error is fatal
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        if let Some(ref source) = self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
