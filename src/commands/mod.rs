//! CLI command implementations for sigtable operations.
//!
//! sigtable has a single command: read the package list, generate the table,
//! and write it out.

pub mod generate;

pub use generate::{execute, handle_generate, GenerateConfig};
