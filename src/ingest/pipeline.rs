//! Ingestion pipeline
//!
//! Write order for one event:
//! 1. Record Store `put` (entity document rewrite)
//! 2. One Index Manager `record` per entry of the index plan, in order
//!
//! The six writes are not atomic. A failure stops the sequence and is
//! returned; earlier writes stay in place. A crash between steps can leave
//! an index missing the entity, never the reverse order.

use crate::index::IndexManager;
use crate::observability::{log_event_with_fields, Event as LogEvent, Logger, Severity};
use crate::schema::{Column, Event};
use crate::storage::{RecordStore, StorageBackend, Viewing};

use super::errors::IngestResult;

/// One planned index write: `column` index gains the entity under `value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexWrite<'e> {
    pub column: Column,
    pub value: &'e str,
}

/// Returns the ordered index writes for an event
pub fn index_plan(event: &Event) -> Vec<IndexWrite<'_>> {
    Column::INDEXED
        .iter()
        .map(|&column| IndexWrite {
            column,
            value: event.get(column),
        })
        .collect()
}

/// What a single ingestion changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Viewing previously held by the (date, title) slot
    pub replaced: Option<Viewing>,
    /// Number of index entries that were new
    pub index_entries_added: usize,
}

/// Writes events into the record store and then the column indexes
pub struct IngestPipeline<'a, B: StorageBackend> {
    records: &'a RecordStore<B>,
    indexes: &'a IndexManager<B>,
}

impl<'a, B: StorageBackend> IngestPipeline<'a, B> {
    /// Creates a pipeline over a record store and index manager
    pub fn new(records: &'a RecordStore<B>, indexes: &'a IndexManager<B>) -> Self {
        Self { records, indexes }
    }

    /// Ingests one already-validated event.
    pub fn ingest(&self, event: &Event) -> IngestResult<IngestOutcome> {
        let replaced = self.records.put(event)?;
        if Logger::enabled(Severity::Trace) {
            log_event_with_fields(
                LogEvent::RecordWritten,
                &[
                    ("stb", event.stb.as_str()),
                    ("date", event.date.as_str()),
                    ("title", event.title.as_str()),
                ],
            );
        }

        let mut index_entries_added = 0;
        for write in index_plan(event) {
            if self.indexes.record(write.column, write.value, &event.stb)? {
                index_entries_added += 1;
                if Logger::enabled(Severity::Trace) {
                    log_event_with_fields(
                        LogEvent::IndexUpdated,
                        &[
                            ("column", write.column.as_str()),
                            ("stb", event.stb.as_str()),
                            ("value", write.value),
                        ],
                    );
                }
            }
        }

        Ok(IngestOutcome {
            replaced,
            index_entries_added,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn titanic() -> Event {
        Event::new("stb1", "2017-04-01", "Titanic", "Paramount", "6.00", "12:30")
    }

    #[test]
    fn test_index_plan_order() {
        let event = titanic();
        let plan = index_plan(&event);

        let columns: Vec<Column> = plan.iter().map(|w| w.column).collect();
        assert_eq!(
            columns,
            vec![Column::Date, Column::Title, Column::Provider, Column::Rev, Column::Time]
        );
        assert_eq!(plan[2].value, "Paramount");
    }

    #[test]
    fn test_ingest_writes_record_and_indexes() {
        let backend = MemoryBackend::new();
        let records = RecordStore::new(backend.clone());
        let indexes = IndexManager::new(backend);
        let pipeline = IngestPipeline::new(&records, &indexes);

        let outcome = pipeline.ingest(&titanic()).unwrap();
        assert!(outcome.replaced.is_none());
        assert_eq!(outcome.index_entries_added, 5);

        assert_eq!(records.get("stb1").unwrap().len(), 1);
        for column in Column::INDEXED {
            let ids = indexes.lookup(column, titanic().get(column)).unwrap();
            assert!(ids.contains("stb1"), "missing stb1 in {} index", column);
        }
    }

    #[test]
    fn test_ingest_twice_adds_nothing() {
        let backend = MemoryBackend::new();
        let records = RecordStore::new(backend.clone());
        let indexes = IndexManager::new(backend);
        let pipeline = IngestPipeline::new(&records, &indexes);

        pipeline.ingest(&titanic()).unwrap();
        let outcome = pipeline.ingest(&titanic()).unwrap();

        assert_eq!(outcome.index_entries_added, 0);
        assert_eq!(outcome.replaced.unwrap().provider, "Paramount");
    }

    #[test]
    fn test_failed_record_write_skips_indexes() {
        let backend = MemoryBackend::new();
        let records = RecordStore::new(backend.clone());
        let indexes = IndexManager::new(backend);
        let pipeline = IngestPipeline::new(&records, &indexes);

        let bad = Event::new("a/b", "2017-04-01", "Titanic", "Paramount", "6.00", "12:30");
        assert!(pipeline.ingest(&bad).is_err());
        assert!(indexes.lookup(Column::Title, "Titanic").unwrap().is_empty());
    }
}
