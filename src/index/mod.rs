//! Index Manager subsystem for stbdb
//!
//! Secondary indexes map each observed column value to the set of entities
//! that produced it, one persisted document per column.
//!
//! # Design Principles
//!
//! - Derived state: indexes mirror entity documents, never the source of truth
//! - Written after the entity document, never read back during a write
//! - Set semantics: an entity is listed once per value
//! - Monotonic: no removal, no compaction
//!
//! # Invariants
//!
//! - Lookup of an unknown column or value is an empty set, not an error
//! - Lookup returns entity ids sorted ascending

mod manager;

pub use manager::{ColumnIndex, IndexManager};
