//! Record schema for stbdb
//!
//! Defines the closed set of columns a viewing event carries and the
//! ingestion line format they are parsed from.
//!
//! # Line Format
//!
//! ```text
//! STB|TITLE|PROVIDER|DATE|REVENUE|TIME
//! ```
//!
//! - DATE is `YYYY-MM-DD`
//! - TIME is `HH:MM` (24-hour)
//! - REVENUE is any float, normalized to two fractional digits

mod column;
mod errors;
mod event;

pub use column::Column;
pub use errors::{SchemaError, SchemaResult};
pub use event::{normalize_revenue, Event, FIELD_SEPARATOR};
