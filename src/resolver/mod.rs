//! Scope resolution.
//!
//! A resolver turns a package path into the scope of declarations it exports.
//! Resolution failures are fatal to a generation run; a partial table would
//! silently mislead the consumer.

pub mod manifest;
pub mod memory;

pub use manifest::{ManifestResolver, SCOPE_MANIFEST, UNIVERSE_MANIFEST};
pub use memory::MemoryResolver;

use std::path::PathBuf;
use thiserror::Error;

use crate::core::Scope;

/// Why a package could not be resolved.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("package {path:?} not found")]
    NotFound { path: String },

    #[error("{path:?} is not a valid package path")]
    InvalidPath { path: String },

    #[error("failed to read {}", file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scope manifest {}", file.display())]
    Malformed {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of resolved scopes.
///
/// Implementations must be thread-safe (`Send + Sync`); packages may be
/// resolved concurrently.
pub trait ScopeResolver: Send + Sync {
    /// The universal (builtin) scope.
    fn universe(&self) -> Result<Scope, ResolveError>;

    /// The scope of the package at `path`.
    fn resolve(&self, path: &str) -> Result<Scope, ResolveError>;
}
