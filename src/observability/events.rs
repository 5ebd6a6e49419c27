//! Observability events for stbdb
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in stbdb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Import
    /// Import of a line stream started
    ImportBegin,
    /// Import finished
    ImportComplete,
    /// A malformed line was skipped
    LineSkipped,
    /// An import stopped on a storage failure
    ImportFailed,

    // Write path
    /// Entity document written
    RecordWritten,
    /// Column index entry added
    IndexUpdated,

    // Query
    /// Query received
    QueryReceived,
    /// Candidate entities resolved
    QueryCandidates,
    /// Query executed successfully
    QueryExecuted,
    /// Query rejected before execution
    QueryRejected,
    /// A candidate's document could not be decoded
    DocumentCorruption,

    // Generator
    /// Synthetic lines written
    GenerateComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::ImportBegin => "IMPORT_BEGIN",
            Event::ImportComplete => "IMPORT_COMPLETE",
            Event::LineSkipped => "LINE_SKIPPED",
            Event::ImportFailed => "IMPORT_FAILED",

            Event::RecordWritten => "RECORD_WRITTEN",
            Event::IndexUpdated => "INDEX_UPDATED",

            Event::QueryReceived => "QUERY_RECEIVED",
            Event::QueryCandidates => "QUERY_CANDIDATES",
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::DocumentCorruption => "DOCUMENT_CORRUPTION",

            Event::GenerateComplete => "GENERATE_COMPLETE",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::DocumentCorruption => Severity::Fatal,
            Event::ImportFailed => Severity::Error,
            Event::LineSkipped | Event::QueryRejected => Severity::Warn,
            Event::RecordWritten | Event::IndexUpdated | Event::QueryCandidates => {
                Severity::Trace
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
