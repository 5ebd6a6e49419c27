//! Result types for query execution

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::{Column, Event};

/// A result row reduced to the selected columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    fields: Vec<(Column, String)>,
}

impl ProjectedRow {
    /// Projects an event onto `select`
    pub fn project(event: &Event, select: &[Column]) -> Self {
        Self {
            fields: select
                .iter()
                .map(|&column| (column, event.get(column).to_string()))
                .collect(),
        }
    }

    /// Returns the value of a selected column
    pub fn get(&self, column: Column) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the selected columns in select order
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.fields.iter().map(|(c, _)| *c)
    }

    /// Returns the values in select order
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    /// Renders the values comma separated, in select order
    pub fn to_csv(&self) -> String {
        self.values().collect::<Vec<_>>().join(",")
    }
}

impl Serialize for ProjectedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column.as_str(), value)?;
        }
        map.end()
    }
}

/// Result of query execution
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    /// Rows in result order
    pub rows: Vec<ProjectedRow>,
    /// Number of candidate entities resolved
    pub candidates: usize,
    /// Number of entity documents loaded
    pub documents_loaded: usize,
}

impl QueryResult {
    /// Creates an empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no rows matched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &ProjectedRow> {
        self.rows.iter()
    }
}
