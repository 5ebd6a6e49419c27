//! Row-level filtering
//!
//! An index hit only proves that some event of an entity carries the value.
//! Every flattened row is checked again here. Exact match only, no coercion.

use crate::schema::Event;
use crate::storage::EntityDocument;

use super::query::Filter;

/// Flattens documents into rows and keeps the rows matching a filter
pub struct RowFilter;

impl RowFilter {
    /// Returns the rows of `document` that match `filter`.
    ///
    /// With no filter every row is kept.
    pub fn matching_rows(document: &EntityDocument, filter: Option<&Filter>) -> Vec<Event> {
        document
            .events()
            .filter(|event| filter.map_or(true, |f| f.matches(event)))
            .collect()
    }
}
