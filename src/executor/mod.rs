//! Query Executor subsystem for stbdb
//!
//! Answers select/filter/order queries over entity documents.
//!
//! # Execution Flow (strict order)
//!
//! 1. Resolve candidate entities from the filter
//! 2. Load each candidate's document
//! 3. Flatten to rows and keep rows matching the filter
//! 4. Sort by the order columns
//! 5. Project onto the select columns
//!
//! # Invariants
//!
//! - Deterministic execution
//! - Corrupt documents fail the query, they are never skipped
//! - Matching and ordering are exact, case-sensitive string operations

mod adapters;
mod errors;
mod executor;
mod filters;
mod query;
mod result;
mod sorter;

pub use errors::{ExecutorError, ExecutorErrorCode, ExecutorResult};
pub use executor::{IndexLookup, QueryEngine, RecordSource};
pub use filters::RowFilter;
pub use query::{
    Filter, Query, INVALID_FILTER, INVALID_ORDER, INVALID_REV_FILTER, INVALID_SELECT,
};
pub use result::{ProjectedRow, QueryResult};
pub use sorter::RowSorter;
