//! Line loader: feeds an import stream through the pipeline
//!
//! Each line is parsed on its own. A malformed line is logged, counted and
//! skipped; the rest of the stream is still imported. A storage failure
//! stops the import.

use std::io::BufRead;

use crate::observability::{log_event_with_fields, Event as LogEvent};
use crate::schema::Event;
use crate::storage::StorageBackend;

use super::errors::{IngestError, IngestResult};
use super::pipeline::IngestPipeline;

/// Counters for one import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Lines read from the stream
    pub lines_read: usize,
    /// Lines ingested
    pub imported: usize,
    /// Malformed lines skipped
    pub skipped: usize,
}

/// Imports every line of `reader` through `pipeline`.
///
/// A line that is not UTF-8 or does not parse is skipped. Only a failed
/// read of the stream itself ends the import early.
pub fn import_lines<B: StorageBackend, R: BufRead>(
    pipeline: &IngestPipeline<'_, B>,
    mut reader: R,
) -> IngestResult<ImportStats> {
    let mut stats = ImportStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let line_number = stats.lines_read + 1;
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| IngestError::Read {
                line: line_number,
                source,
            })?;
        if read == 0 {
            break;
        }
        stats.lines_read += 1;

        let parsed = match std::str::from_utf8(&buf) {
            Ok(line) => Event::parse_line(line).map_err(|e| e.to_string()),
            Err(e) => Err(format!("Line is not valid UTF-8: {}", e)),
        };

        let event = match parsed {
            Ok(event) => event,
            Err(reason) => {
                stats.skipped += 1;
                skip_line(line_number, &reason);
                continue;
            }
        };

        pipeline.ingest(&event)?;
        stats.imported += 1;
    }

    Ok(stats)
}

fn skip_line(line_number: usize, reason: &str) {
    let line_field = line_number.to_string();
    log_event_with_fields(
        LogEvent::LineSkipped,
        &[
            ("line", line_field.as_str()),
            ("reason", reason),
            ("message", "Mal-formatted line. Skipping."),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexManager;
    use crate::schema::Column;
    use crate::storage::{MemoryBackend, RecordStore};
    use std::io::Cursor;

    #[test]
    fn test_import_skips_malformed_lines() {
        let backend = MemoryBackend::new();
        let records = RecordStore::new(backend.clone());
        let indexes = IndexManager::new(backend);
        let pipeline = IngestPipeline::new(&records, &indexes);

        let input = "stb1|Titanic|Paramount|2017-04-01|6.00|12:30\n\
                     stb2|Logan|MGM|2017-04-31|4.00|10:00\n\
                     \n\
                     stb3|Alien|MGM|2017-04-02|4|10:00\r\n";
        let stats = import_lines(&pipeline, Cursor::new(input)).unwrap();

        assert_eq!(
            stats,
            ImportStats {
                lines_read: 4,
                imported: 2,
                skipped: 2,
            }
        );
        assert!(!records.contains("stb2").unwrap());
        assert_eq!(
            records.get("stb3").unwrap().viewing("2017-04-02", "Alien").unwrap().rev,
            "4.00"
        );
        assert!(indexes.lookup(Column::Title, "Logan").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let backend = MemoryBackend::new();
        let records = RecordStore::new(backend.clone());
        let indexes = IndexManager::new(backend);
        let pipeline = IngestPipeline::new(&records, &indexes);

        let mut input = b"stb1|Titanic|Paramount|2017-04-01|6.00|12:30\n".to_vec();
        input.extend_from_slice(b"stb2|Bad\xff|MGM|2017-04-02|4.00|10:00\n");
        input.extend_from_slice(b"stb3|Alien|MGM|2017-04-02|4|10:00");
        let stats = import_lines(&pipeline, Cursor::new(input)).unwrap();

        assert_eq!(
            stats,
            ImportStats {
                lines_read: 3,
                imported: 2,
                skipped: 1,
            }
        );
        assert!(!records.contains("stb2").unwrap());
        assert!(records.contains("stb3").unwrap());
    }

    #[test]
    fn test_import_empty_stream() {
        let backend = MemoryBackend::new();
        let records = RecordStore::new(backend.clone());
        let indexes = IndexManager::new(backend);
        let pipeline = IngestPipeline::new(&records, &indexes);

        let stats = import_lines(&pipeline, Cursor::new("")).unwrap();
        assert_eq!(stats, ImportStats::default());
    }

    #[test]
    fn test_storage_failure_stops_import() {
        let backend = MemoryBackend::new();
        let records = RecordStore::new(backend.clone());
        let indexes = IndexManager::new(backend);
        let pipeline = IngestPipeline::new(&records, &indexes);

        let input = "stb1|Titanic|Paramount|2017-04-01|6.00|12:30\n\
                     ../x|Alien|MGM|2017-04-02|4|10:00\n\
                     stb3|Alien|MGM|2017-04-02|4|10:00\n";
        let err = import_lines(&pipeline, Cursor::new(input)).unwrap_err();

        assert!(err.storage().is_some());
        assert!(records.contains("stb1").unwrap());
        assert!(!records.contains("stb3").unwrap());
    }
}
