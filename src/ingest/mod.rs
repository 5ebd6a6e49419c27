//! Ingestion subsystem for stbdb
//!
//! Turns validated events into an entity document write followed by the
//! column index writes, and loads whole line streams.

mod errors;
mod loader;
mod pipeline;

pub use errors::{IngestError, IngestResult};
pub use loader::{import_lines, ImportStats};
pub use pipeline::{index_plan, IndexWrite, IngestOutcome, IngestPipeline};
