//! The generation pipeline: order, harvest, register, assemble.

use rayon::prelude::*;

use crate::assemble::{assemble, Table};
use crate::core::PackagePath;
use crate::errors::{Error, Result};
use crate::harvest::{harvest_package, harvest_universe, ExclusionPolicy, Harvest};
use crate::ordering::processing_order;
use crate::registry::Registries;
use crate::resolver::ScopeResolver;

/// Label used in errors when the universe itself cannot be resolved.
const UNIVERSE_LABEL: &str = "<universe>";

/// Knobs for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub exclusions: ExclusionPolicy,
    /// Resolve and harvest packages on the rayon pool.
    pub parallel: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            exclusions: ExclusionPolicy::default(),
            parallel: true,
        }
    }
}

/// Generate the signature table for `packages`.
///
/// Input order does not matter. Empty paths name no package and are skipped.
/// Any resolution failure aborts the run and no table is returned.
pub fn generate<R, I, S>(resolver: &R, packages: I, options: &GenerateOptions) -> Result<Table>
where
    R: ScopeResolver + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<PackagePath>,
{
    let mut order = processing_order(packages);
    order.retain(|path| {
        if path.is_empty() {
            log::warn!("Skipping empty package path");
        }
        !path.is_empty()
    });
    log::debug!("Processing {} package(s)", order.len());

    let universe = resolver
        .universe()
        .map_err(|e| Error::resolution(UNIVERSE_LABEL, e))?;

    let mut registries = Registries::new();
    let stats = registries.absorb(&harvest_universe(&universe));
    log::debug!(
        "universe: {} interface(s), {} func(s)",
        stats.interfaces,
        stats.functions
    );

    // Registry writes stay sequential and in processing order regardless of
    // how the harvests were produced.
    for harvest in harvest_all(resolver, &order, options)? {
        let stats = registries.absorb(&harvest);
        log::debug!(
            "{}: {} interface(s), {} func(s), {} shadowed",
            harvest.package,
            stats.interfaces,
            stats.functions,
            stats.shadowed
        );
    }

    let table = assemble(&registries, &order);
    log::info!(
        "Generated table: {} package(s), {} interface(s), {} func(s)",
        table.packages.len(),
        table.interfaces.len(),
        table.functions.len()
    );
    Ok(table)
}

/// Harvest every non-excluded package, returning results in `order`.
fn harvest_all<R>(
    resolver: &R,
    order: &[PackagePath],
    options: &GenerateOptions,
) -> Result<Vec<Harvest>>
where
    R: ScopeResolver + ?Sized,
{
    let policy = &options.exclusions;
    if options.parallel {
        // Collect every outcome first so the reported failure is the first one
        // in processing order, not whichever thread lost the race.
        let outcomes: Vec<Result<Option<Harvest>>> = order
            .par_iter()
            .map(|path| harvest_one(resolver, path, policy))
            .collect();
        outcomes
            .into_iter()
            .filter_map(Result::transpose)
            .collect()
    } else {
        order
            .iter()
            .map(|path| harvest_one(resolver, path, policy))
            .filter_map(Result::transpose)
            .collect()
    }
}

fn harvest_one<R>(resolver: &R, path: &str, policy: &ExclusionPolicy) -> Result<Option<Harvest>>
where
    R: ScopeResolver + ?Sized,
{
    if policy.is_excluded(path) {
        log::debug!("{}: excluded", path);
        return Ok(None);
    }
    let scope = resolver
        .resolve(path)
        .map_err(|e| Error::resolution(path, e))?;
    Ok(Some(harvest_package(path, &scope)))
}
