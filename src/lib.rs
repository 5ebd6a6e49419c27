//! stbdb - a per-box viewing event store
//!
//! Imports pipe-delimited viewing events into one JSON document per
//! set-top box, keeps a value-to-boxes index per column, and answers
//! select/filter/order queries.

pub mod cli;
pub mod datastore;
pub mod executor;
pub mod generator;
pub mod index;
pub mod ingest;
pub mod observability;
pub mod schema;
pub mod storage;

pub use datastore::Datastore;
