//! CLI Command Tests
//!
//! Drives the commands the way the binary does: generate a file, import it,
//! query the resulting data directory.

use std::fs;

use clap::Parser;
use stbdb::cli::{self, Cli, Config, OutputFormat};
use tempfile::TempDir;

fn config_for(temp: &TempDir) -> Config {
    Config::resolve(None, Some(&temp.path().join("data"))).unwrap()
}

fn query_csv(config: &Config, select: &str, filter: Option<&str>, order: Option<&str>) -> String {
    let mut out = Vec::new();
    cli::query(config, Some(select), filter, order, OutputFormat::Csv, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Generated lines import without a single skip.
#[test]
fn test_generate_then_import() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input.txt");
    let data_dir = temp.path().join("data");

    let generate = Cli::try_parse_from([
        "stbdb",
        "generate",
        "--output",
        input.to_str().unwrap(),
        "--entries",
        "50",
        "--boxes",
        "4",
    ])
    .unwrap();
    cli::run_command(generate).unwrap();
    assert_eq!(fs::read_to_string(&input).unwrap().lines().count(), 50);

    let config = config_for(&temp);
    let stats = cli::import(&config, &input).unwrap();
    assert_eq!(stats.lines_read, 50);
    assert_eq!(stats.skipped, 0);

    let boxes = query_csv(&config, "stb", None, Some("stb"));
    let mut distinct: Vec<&str> = boxes.lines().collect();
    distinct.dedup();
    assert!(distinct.len() <= 4);
    assert!(distinct.iter().all(|stb| data_dir.join(format!("{}.json", stb)).exists()));
}

/// The import command runs end to end through the parsed command line.
#[test]
fn test_import_command_with_config_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input.txt");
    fs::write(
        &input,
        "stb1|Titanic|Paramount|2017-04-01|6.00|12:30\nstb1|broken\nstb2|Alien|MGM|2017-04-02|4|20:00\n",
    )
    .unwrap();

    let config_path = temp.path().join("stbdb.json");
    let data_dir = temp.path().join("data");
    fs::write(
        &config_path,
        serde_json::json!({"data_dir": data_dir, "log_level": "error"}).to_string(),
    )
    .unwrap();

    let import = Cli::try_parse_from([
        "stbdb",
        "--config",
        config_path.to_str().unwrap(),
        "import",
        input.to_str().unwrap(),
    ])
    .unwrap();
    cli::run_command(import).unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(
        query_csv(&config, "stb,rev", None, Some("stb")),
        "stb1,6.00\nstb2,4.00\n"
    );
}

/// Query arguments are validated before any data is read.
#[test]
fn test_query_rejects_bad_arguments() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp);

    let mut out = Vec::new();
    let err = cli::query(&config, Some("stb"), Some("genre=Drama"), None, OutputFormat::Csv, &mut out)
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid FILTER argument(s). See --help for help.");
    assert!(out.is_empty());
}

/// JSON output keys rows by column name.
#[test]
fn test_query_json_output() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp);
    let input = temp.path().join("input.txt");
    fs::write(&input, "stb1|Titanic|Paramount|2017-04-01|6.00|12:30\n").unwrap();
    cli::import(&config, &input).unwrap();

    let mut out = Vec::new();
    let rows = cli::query(
        &config,
        Some("stb,rev"),
        Some("provider=Paramount"),
        Some("stb"),
        OutputFormat::Json,
        &mut out,
    )
    .unwrap();

    assert_eq!(rows, 1);
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value, serde_json::json!({"stb": "stb1", "rev": "6.00"}));
}
