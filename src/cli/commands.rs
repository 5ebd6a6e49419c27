//! CLI command implementations
//!
//! Each command resolves the configuration, sets the log level, then works
//! against a `Datastore` opened on the configured data directory.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::datastore::Datastore;
use crate::executor::{ExecutorError, ExecutorErrorCode, Query, INVALID_SELECT};
use crate::generator::{generate_file, GeneratorConfig};
use crate::ingest::ImportStats;
use crate::observability::{log_event_with_fields, Event, Logger};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_line, write_rows, OutputFormat};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Run a parsed command line
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::resolve(cli.config.as_deref(), cli.data_dir.as_deref())?;
    Logger::set_min_severity(config.min_severity()?);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("data_dir", config.data_dir.as_str()),
            ("log_level", config.log_level.as_str()),
        ],
    );

    match cli.command {
        Command::Import { file } => {
            let stats = import(&config, &file)?;
            write_line(&format!(
                "imported {} of {} lines",
                stats.imported, stats.lines_read
            ))
        }
        Command::Query {
            select,
            filter,
            order,
            json,
        } => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Csv
            };
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            query(
                &config,
                select.as_deref(),
                filter.as_deref(),
                order.as_deref(),
                format,
                &mut out,
            )
            .map(|_| ())
        }
        Command::Generate {
            output,
            entries,
            boxes,
        } => generate(&output, GeneratorConfig { entries, boxes }).map(|_| ()),
    }
}

/// Import every line of `file` into the configured data directory
pub fn import(config: &Config, file: &Path) -> CliResult<ImportStats> {
    let input = File::open(file).map_err(|e| {
        CliError::io_error(format!("Failed to open {}: {}", file.display(), e))
    })?;

    Datastore::open(config.data_path())
        .import(BufReader::new(input))
        .map_err(|e| CliError::import_failed(e.to_string()))
}

/// Run a query from CLI text and write the rows to `out`.
///
/// Returns the number of rows written.
pub fn query<W: Write>(
    config: &Config,
    select: Option<&str>,
    filter: Option<&str>,
    order: Option<&str>,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<usize> {
    let select = select.ok_or_else(|| reject(INVALID_SELECT))?;
    let query = Query::parse(select, filter, order).map_err(query_error)?;

    let result = Datastore::open(config.data_path())
        .query(&query)
        .map_err(query_error)?;

    write_rows(out, &result, format)?;
    Ok(result.len())
}

/// Append synthetic lines to `output`
pub fn generate(output: &Path, config: GeneratorConfig) -> CliResult<usize> {
    let written = generate_file(output, config).map_err(|e| {
        CliError::io_error(format!("Failed to write {}: {}", output.display(), e))
    })?;

    let path = output.display().to_string();
    let entries = written.to_string();
    log_event_with_fields(
        Event::GenerateComplete,
        &[("output", path.as_str()), ("entries", entries.as_str())],
    );
    Ok(written)
}

fn reject(message: &str) -> CliError {
    log_event_with_fields(Event::QueryRejected, &[("reason", message)]);
    CliError::invalid_argument(message)
}

fn query_error(e: ExecutorError) -> CliError {
    match e.code() {
        ExecutorErrorCode::StbQueryInvalid => reject(e.message()),
        _ => CliError::query_failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(temp: &TempDir) -> Config {
        Config::resolve(None, Some(&temp.path().join("data"))).unwrap()
    }

    fn import_text(config: &Config, temp: &TempDir, text: &str) -> ImportStats {
        let input = temp.path().join("input.txt");
        fs::write(&input, text).unwrap();
        import(config, &input).unwrap()
    }

    fn run_query(
        config: &Config,
        select: Option<&str>,
        filter: Option<&str>,
        order: Option<&str>,
    ) -> CliResult<String> {
        let mut out = Vec::new();
        query(config, select, filter, order, OutputFormat::Csv, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_import_counts_skipped_lines() {
        let temp = TempDir::new().unwrap();
        let config = config_for(&temp);

        let stats = import_text(
            &config,
            &temp,
            "stb1|Titanic|Paramount|2017-04-01|6.00|12:30\nnot a line\n",
        );

        assert_eq!(stats.lines_read, 2);
        assert_eq!(stats.imported, 1);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_import_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = config_for(&temp);

        let err = import(&config, &temp.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.code_str(), "STB_CLI_IO_ERROR");
    }

    #[test]
    fn test_query_rows_in_select_order() {
        let temp = TempDir::new().unwrap();
        let config = config_for(&temp);
        import_text(
            &config,
            &temp,
            "stb2|Alien|MGM|2017-04-02|4.00|20:00\nstb1|Titanic|Paramount|2017-04-01|6.00|12:30\n",
        );

        let out = run_query(&config, Some("rev,STB"), None, Some("stb")).unwrap();
        assert_eq!(out, "6.00,stb1\n4.00,stb2\n");
    }

    #[test]
    fn test_query_rev_filter_is_normalized() {
        let temp = TempDir::new().unwrap();
        let config = config_for(&temp);
        import_text(&config, &temp, "stb1|Titanic|Paramount|2017-04-01|6.00|12:30\n");

        let out = run_query(&config, Some("stb"), Some("rev=6"), None).unwrap();
        assert_eq!(out, "stb1\n");
    }

    #[test]
    fn test_query_argument_messages() {
        let temp = TempDir::new().unwrap();
        let config = config_for(&temp);

        let cases = [
            (None, None, None, "Invalid SELECT argument(s). See --help for help."),
            (Some("stb,color"), None, None, "Invalid SELECT argument(s). See --help for help."),
            (Some("stb"), None, Some("size"), "Invalid ORDER arguments(s). See --help for help."),
            (Some("stb"), Some("provider"), None, "Invalid FILTER argument(s). See --help for help."),
            (Some("stb"), Some("rev=abc"), None, "Invalid number for rev filter."),
        ];

        for (select, filter, order, expected) in cases {
            let err = run_query(&config, select, filter, order).unwrap_err();
            assert_eq!(err.code_str(), "STB_CLI_INVALID_ARGUMENT");
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_query_empty_data_dir() {
        let temp = TempDir::new().unwrap();
        let config = config_for(&temp);

        let out = run_query(&config, Some("stb"), Some("title=NoSuchTitle"), None).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_generate_appends() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("input.txt");
        let config = GeneratorConfig {
            entries: 5,
            boxes: 2,
        };

        generate(&output, config).unwrap();
        generate(&output, config).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 10);
    }
}
