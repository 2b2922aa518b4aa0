//! Error types for table generation.
//!
//! Every variant is fatal: generation is an all-or-nothing batch step, so
//! callers propagate these with `?` until they reach the binary, which reports
//! the chain once and exits with a failure status.

use std::path::PathBuf;
use thiserror::Error;

use crate::resolver::ResolveError;

/// Main error type for sigtable operations
#[derive(Debug, Error)]
pub enum Error {
    /// The package list could not be fully read
    #[error("failed to read package list")]
    InputRead {
        #[source]
        source: std::io::Error,
    },

    /// A package's scope could not be resolved
    #[error("cannot resolve package {path:?}")]
    Resolution {
        path: String,
        #[source]
        source: ResolveError,
    },

    /// The output destination could not be created
    #[error("cannot create output file {}", path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rendered table could not be written to its destination
    #[error("failed to write output to {destination}")]
    SinkWrite {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file errors
    #[error("configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// The table could not be serialized
    #[error("failed to render table")]
    Render {
        #[source]
        source: serde_json::Error,
    },

    /// Formatting into the output buffer failed
    #[error("failed to format table")]
    Format {
        #[source]
        source: std::fmt::Error,
    },
}

impl Error {
    /// Wrap a resolver failure with the path that was being resolved.
    pub fn resolution(path: impl Into<String>, source: ResolveError) -> Self {
        Self::Resolution {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with path context
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Render { source: err }
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::Format { source: err }
    }
}

/// Result type alias using the sigtable [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
