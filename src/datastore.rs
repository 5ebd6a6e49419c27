//! Datastore: record store and column indexes over one backend
//!
//! The write path and the query path both go through here. A `Datastore`
//! over a `LocalBackend` is the on-disk store used by the CLI; one over a
//! `MemoryBackend` is used in tests.

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Instant;

use crate::executor::{ExecutorResult, Query, QueryEngine, QueryResult};
use crate::index::IndexManager;
use crate::ingest::{import_lines, ImportStats, IngestOutcome, IngestPipeline, IngestResult};
use crate::observability::{log_event, log_event_with_fields, Event as LogEvent};
use crate::schema::Event;
use crate::storage::{LocalBackend, MemoryBackend, RecordStore, StorageBackend};

/// Entity documents plus their column indexes
#[derive(Debug, Clone)]
pub struct Datastore<B: StorageBackend + Clone> {
    records: RecordStore<B>,
    indexes: IndexManager<B>,
}

impl Datastore<LocalBackend> {
    /// Opens the store under `data_dir`.
    ///
    /// The directory is created on the first write, not here.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_backend(LocalBackend::new(data_dir))
    }
}

impl Datastore<MemoryBackend> {
    /// Creates an empty in-memory store
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }
}

impl<B: StorageBackend + Clone> Datastore<B> {
    /// Creates a store over a backend shared by records and indexes
    pub fn with_backend(backend: B) -> Self {
        Self {
            records: RecordStore::new(backend.clone()),
            indexes: IndexManager::new(backend),
        }
    }

    /// Ingests one validated event
    pub fn ingest(&self, event: &Event) -> IngestResult<IngestOutcome> {
        IngestPipeline::new(&self.records, &self.indexes).ingest(event)
    }

    /// Imports a stream of ingestion lines, skipping malformed ones
    pub fn import<R: BufRead>(&self, reader: R) -> IngestResult<ImportStats> {
        log_event(LogEvent::ImportBegin);
        let started = Instant::now();

        let pipeline = IngestPipeline::new(&self.records, &self.indexes);
        let stats = match import_lines(&pipeline, reader) {
            Ok(stats) => stats,
            Err(e) => {
                let error = e.to_string();
                log_event_with_fields(LogEvent::ImportFailed, &[("error", error.as_str())]);
                return Err(e);
            }
        };

        let imported = stats.imported.to_string();
        let skipped = stats.skipped.to_string();
        let elapsed = started.elapsed().as_millis().to_string();
        log_event_with_fields(
            LogEvent::ImportComplete,
            &[
                ("imported", imported.as_str()),
                ("skipped", skipped.as_str()),
                ("elapsed_ms", elapsed.as_str()),
            ],
        );
        Ok(stats)
    }

    /// Executes a select/filter/order query
    pub fn query(&self, query: &Query) -> ExecutorResult<QueryResult> {
        let filter = query
            .filter
            .as_ref()
            .map(|f| format!("{}={}", f.column, f.value))
            .unwrap_or_default();
        log_event_with_fields(LogEvent::QueryReceived, &[("filter", filter.as_str())]);

        let result = QueryEngine::new(&self.indexes, &self.records).execute(query)?;

        let rows = result.len().to_string();
        let loaded = result.documents_loaded.to_string();
        log_event_with_fields(
            LogEvent::QueryExecuted,
            &[("rows", rows.as_str()), ("documents_loaded", loaded.as_str())],
        );
        Ok(result)
    }

    /// Returns the record store
    pub fn records(&self) -> &RecordStore<B> {
        &self.records
    }

    /// Returns the index manager
    pub fn indexes(&self) -> &IndexManager<B> {
        &self.indexes
    }
}
