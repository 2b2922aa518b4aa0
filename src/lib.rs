//! Build-time generator for signature lookup tables.
//!
//! Given a set of package paths and a resolver for their scopes, sigtable
//! records, for every interface method set and function signature, the one
//! named declaration that should be suggested for it. Precedence is fixed:
//! builtins first, then packages by ascending path length and then
//! lexicographically, first writer wins.

// Export modules for library usage
pub mod assemble;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod generate;
pub mod harvest;
pub mod io;
pub mod ordering;
pub mod registry;
pub mod resolver;

// Re-export commonly used types
pub use crate::assemble::{assemble, Table, TableEntry};
pub use crate::core::{Declaration, DeclKind, PackagePath, Scope, Signature, Symbol};
pub use crate::errors::{Error, Result};
pub use crate::generate::{generate, GenerateOptions};
pub use crate::harvest::{harvest_package, harvest_universe, ExclusionPolicy, Harvest};
pub use crate::ordering::processing_order;
pub use crate::registry::{Registries, SignatureRegistry};
pub use crate::resolver::{ManifestResolver, MemoryResolver, ResolveError, ScopeResolver};
