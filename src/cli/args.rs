//! CLI argument definitions using clap
//!
//! Commands:
//! - stbdb import <FILE>
//! - stbdb query -s <SELECT> [-f <FILTER>] [-o <ORDER>]
//! - stbdb generate [--output <FILE>] [--entries <N>] [--boxes <N>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stbdb - set-top-box viewing data import and search.
///
/// Expected import line: STB|TITLE|PROVIDER|DATE|REVENUE|TIME
#[derive(Parser, Debug)]
#[command(name = "stbdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (overrides the configuration file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import a data stream file into the datastore
    Import {
        /// File of STB|TITLE|PROVIDER|DATE|REVENUE|TIME lines
        file: PathBuf,
    },

    /// Select, filter and order stored records
    Query {
        /// SELECT from comma separated list of columns (STB,TITLE,PROVIDER,DATE,REV,TIME)
        #[arg(short = 's', long)]
        select: Option<String>,

        /// FILTER from one column=value pair. CASE SENSITIVE. ex -f date=2017-04-21
        #[arg(short = 'f', long)]
        filter: Option<String>,

        /// ORDER from comma separated list of columns (STB,TITLE,PROVIDER,DATE,REV,TIME)
        #[arg(short = 'o', long)]
        order: Option<String>,

        /// Print one JSON object per row instead of comma separated values
        #[arg(long)]
        json: bool,
    },

    /// Append synthetic data stream lines to a file
    Generate {
        /// Output file
        #[arg(long, default_value = "input.txt")]
        output: PathBuf,

        /// Number of lines to write
        #[arg(long, default_value_t = 100)]
        entries: usize,

        /// Number of distinct boxes
        #[arg(long, default_value_t = 10)]
        boxes: u32,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
