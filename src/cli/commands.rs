//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Fetch a SIDRA table descriptor and write its lists as Parquet files
#[derive(Parser, Debug, Default)]
#[command(name = "sidra-extract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL of the JSON document (defaults to SIDRA table 1737)
    #[arg(long, conflicts_with = "input")]
    pub url: Option<String>,

    /// Read the document from a local JSON file instead of fetching it
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
