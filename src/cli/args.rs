use clap::Parser;
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "sigtable")]
#[command(
    about = "Generate signature lookup tables from resolved package scopes",
    long_about = "Reads package import paths from stdin, one per line, and writes a table \
                  mapping interface method sets and function signatures to the canonical \
                  type or function that declares them."
)]
#[command(version)]
pub struct Cli {
    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory holding scope manifests
    #[arg(short, long, env = "SIGTABLE_SCOPES", default_value = "scopes")]
    pub scopes: PathBuf,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Package clause of the generated Go file (overrides config)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Configuration file (defaults to .sigtable.toml in the current directory or an ancestor)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of worker threads (0 = all cores, 1 = sequential)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    pub jobs: usize,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
