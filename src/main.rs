use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use sigtable::cli::{self, Cli};
use sigtable::commands::{handle_generate, GenerateConfig};

// Main orchestrator function
fn main() -> ExitCode {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = sigtable::config::load_config(cli.config.as_deref())?;
    cli::configure_thread_pool(cli.jobs);
    handle_generate(GenerateConfig::from_sources(&cli, config))
}
