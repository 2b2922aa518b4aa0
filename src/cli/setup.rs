//! Setup and initialization functions for CLI
//!
//! This module contains functions for initializing the runtime environment,
//! including thread pool configuration and logging setup.

use log::LevelFilter;

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        // Already configured - this is fine, just ignore
        log::debug!("Thread pool already configured: {}", e);
    }
}

/// Whether harvesting should use the thread pool for a given `--jobs` value
pub fn use_parallel(jobs: usize, configured: bool) -> bool {
    configured && jobs != 1
}

/// Map `-v` occurrences to a log level
pub fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging to stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(verbosity_level(verbosity))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .parse_default_env();
    // A logger may already be installed when embedded
    let _ = builder.try_init();
}
