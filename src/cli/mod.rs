//! CLI module for sigtable
//!
//! This module provides the command-line interface for sigtable, including:
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::Cli;
pub use setup::{configure_thread_pool, init_logging, use_parallel, verbosity_level};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    use clap::Parser;
    Cli::parse()
}
