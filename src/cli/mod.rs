//! CLI module for stbdb
//!
//! Provides command-line interface for:
//! - import: Load a data stream file into the datastore
//! - query: Select, filter and order stored records
//! - generate: Write synthetic data stream lines

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{generate, import, query, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_line, write_rows, OutputFormat};
