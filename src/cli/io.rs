//! Output handling for CLI
//!
//! - Rows: one line per row on stdout, values joined by ','
//! - `--json`: one JSON object per row, keyed by column name
//! - UTF-8 only

use std::io::{self, Write};

use crate::executor::QueryResult;

use super::errors::CliResult;

/// How result rows are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma separated values in select order
    Csv,
    /// One JSON object per row
    Json,
}

/// Write query rows to `writer`
pub fn write_rows<W: Write>(
    writer: &mut W,
    result: &QueryResult,
    format: OutputFormat,
) -> CliResult<()> {
    for row in result.iter() {
        match format {
            OutputFormat::Csv => writeln!(writer, "{}", row.to_csv())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, row)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write a single line to stdout
pub fn write_line(line: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}
