//! Query engine for stbdb
//!
//! Execution flow (strict order):
//! 1. Resolve candidate entities (full listing, the `stb` value itself, or an
//!    index lookup)
//! 2. Short-circuit on an empty candidate set
//! 3. Load each candidate's document; corruption aborts the query
//! 4. Flatten documents into rows and re-check the filter on every row
//! 5. Sort by the order columns (string comparison)
//! 6. Project onto the select columns

use std::collections::BTreeSet;

use crate::observability::{log_event_with_fields, Event as LogEvent};
use crate::schema::Column;
use crate::storage::EntityDocument;

use super::errors::ExecutorResult;
use super::filters::RowFilter;
use super::query::{Filter, Query};
use super::result::{ProjectedRow, QueryResult};
use super::sorter::RowSorter;

/// Trait for resolving entity ids through a column index
pub trait IndexLookup {
    /// Entity ids recorded under `value` in `column`'s index
    fn lookup(&self, column: Column, value: &str) -> ExecutorResult<BTreeSet<String>>;
}

/// Trait for reading entity documents
pub trait RecordSource {
    /// Every entity id with a document
    fn entity_ids(&self) -> ExecutorResult<BTreeSet<String>>;

    /// The entity's document.
    ///
    /// Returns `Ok(None)` if the entity has no document.
    /// Returns `Err` if the document is unreadable.
    fn document(&self, stb: &str) -> ExecutorResult<Option<EntityDocument>>;
}

/// Query engine that answers select/filter/order queries
pub struct QueryEngine<'a, I: IndexLookup, S: RecordSource> {
    index: &'a I,
    records: &'a S,
}

impl<'a, I: IndexLookup, S: RecordSource> QueryEngine<'a, I, S> {
    /// Creates a new engine
    pub fn new(index: &'a I, records: &'a S) -> Self {
        Self { index, records }
    }

    /// Executes a query.
    ///
    /// Same query + same store = same rows in the same order.
    pub fn execute(&self, query: &Query) -> ExecutorResult<QueryResult> {
        query.validate()?;

        // Steps 1-2
        let candidates = self.candidates(query.filter.as_ref())?;
        let candidate_count = candidates.len().to_string();
        log_event_with_fields(
            LogEvent::QueryCandidates,
            &[
                ("candidates", candidate_count.as_str()),
                ("strategy", Self::strategy(query.filter.as_ref())),
            ],
        );
        if candidates.is_empty() {
            return Ok(QueryResult::empty());
        }

        // Steps 3-4
        let mut rows = Vec::new();
        let mut documents_loaded = 0;
        for stb in &candidates {
            let document = match self.records.document(stb) {
                Ok(Some(doc)) => doc,
                Ok(None) => continue,
                Err(e) => {
                    if e.is_fatal() {
                        log_event_with_fields(
                            LogEvent::DocumentCorruption,
                            &[("stb", stb.as_str()), ("error", e.message())],
                        );
                    }
                    return Err(e);
                }
            };
            documents_loaded += 1;
            rows.extend(RowFilter::matching_rows(&document, query.filter.as_ref()));
        }

        // Step 5
        RowSorter::sort(&mut rows, &query.order);

        // Step 6
        let rows = rows
            .iter()
            .map(|event| ProjectedRow::project(event, &query.select))
            .collect();

        Ok(QueryResult {
            rows,
            candidates: candidates.len(),
            documents_loaded,
        })
    }

    /// Resolves the entities that may hold matching rows
    fn candidates(&self, filter: Option<&Filter>) -> ExecutorResult<BTreeSet<String>> {
        match filter {
            // Full scan, grows with the store
            None => self.records.entity_ids(),
            Some(f) if f.column == Column::Stb => Ok(BTreeSet::from([f.value.clone()])),
            Some(f) => self.index.lookup(f.column, &f.value),
        }
    }

    fn strategy(filter: Option<&Filter>) -> &'static str {
        match filter {
            None => "full_scan",
            Some(f) if f.column == Column::Stb => "entity_id",
            Some(_) => "index",
        }
    }
}
