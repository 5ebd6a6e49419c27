//! Executor error types
//!
//! Error codes:
//! - STB_QUERY_INVALID (ERROR)
//! - STB_EXECUTION_FAILED (ERROR)
//! - STB_DATA_CORRUPTION (FATAL)

use std::fmt;

use crate::storage::StorageError;

/// Severity levels for executor errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Query failed but the store is healthy
    Error,
    /// A persisted document is unreadable
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

/// Executor-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorErrorCode {
    /// Query arguments rejected before execution
    StbQueryInvalid,
    /// General execution failure (I/O)
    StbExecutionFailed,
    /// A candidate document could not be decoded
    StbDataCorruption,
}

impl ExecutorErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorErrorCode::StbQueryInvalid => "STB_QUERY_INVALID",
            ExecutorErrorCode::StbExecutionFailed => "STB_EXECUTION_FAILED",
            ExecutorErrorCode::StbDataCorruption => "STB_DATA_CORRUPTION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            ExecutorErrorCode::StbDataCorruption => Severity::Fatal,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ExecutorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Executor error type with full context
#[derive(Debug)]
pub struct ExecutorError {
    /// Error code
    code: ExecutorErrorCode,
    /// Human-readable message
    message: String,
}

impl ExecutorError {
    /// Create an invalid query error
    pub fn invalid_query(reason: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::StbQueryInvalid,
            message: reason.into(),
        }
    }

    /// Create an execution failed error
    pub fn execution_failed(reason: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::StbExecutionFailed,
            message: reason.into(),
        }
    }

    /// Create a data corruption error (FATAL)
    pub fn data_corruption(reason: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::StbDataCorruption,
            message: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ExecutorErrorCode {
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

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ExecutorError {}

impl From<StorageError> for ExecutorError {
    fn from(e: StorageError) -> Self {
        if e.is_fatal() {
            let reason = match e.details() {
                Some(details) => format!("{} ({})", e.message(), details),
                None => e.message().to_string(),
            };
            Self::data_corruption(reason)
        } else {
            Self::execution_failed(e.to_string())
        }
    }
}

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;
