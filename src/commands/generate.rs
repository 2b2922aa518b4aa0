use anyhow::Result;
use std::io::BufRead;
use std::path::PathBuf;

use crate::assemble::Table;
use crate::cli::{use_parallel, Cli};
use crate::config::SigtableConfig;
use crate::generate::{generate, GenerateOptions};
use crate::io::{
    create_writer, destination_for, read_package_list, GoOptions, OutputDestination, OutputFormat,
};
use crate::resolver::{ManifestResolver, ScopeResolver};

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub scopes: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub go: GoOptions,
    pub options: GenerateOptions,
}

impl GenerateConfig {
    /// Merge CLI flags over file configuration over defaults.
    pub fn from_sources(cli: &Cli, config: SigtableConfig) -> Self {
        let mut go = config.output.go_options();
        if let Some(package) = &cli.package {
            go.package = package.clone();
        }
        Self {
            scopes: cli.scopes.clone(),
            output: cli.output.clone(),
            format: cli.format.or(config.output.format).unwrap_or_default(),
            go,
            options: GenerateOptions {
                exclusions: config.exclude,
                parallel: use_parallel(cli.jobs, config.harvest.parallel),
            },
        }
    }
}

/// Read packages from `input`, generate, render, and write to `destination`.
///
/// Nothing reaches the destination unless every step before it succeeded.
pub fn execute<R, I>(
    config: &GenerateConfig,
    resolver: &R,
    input: I,
    destination: &dyn OutputDestination,
) -> Result<Table>
where
    R: ScopeResolver + ?Sized,
    I: BufRead,
{
    let packages = read_package_list(input)?;
    let table = generate(resolver, packages, &config.options)?;
    let rendered = create_writer(config.format, config.go.clone()).render(&table)?;
    destination.write_str(&rendered)?;
    log::debug!("Wrote table to {}", destination.description());
    Ok(table)
}

/// Run generation against the manifest directory, reading stdin.
pub fn handle_generate(config: GenerateConfig) -> Result<()> {
    let resolver = ManifestResolver::new(&config.scopes);
    let destination = destination_for(config.output.clone());
    let stdin = std::io::stdin();
    execute(&config, &resolver, stdin.lock(), destination.as_ref())?;
    Ok(())
}
