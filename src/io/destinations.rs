//! Output destination abstractions for the generated table.
//!
//! This module provides the `OutputDestination` trait and implementations
//! for the places a rendered table can go (file, memory, stdout). Content is
//! rendered completely before a destination is touched, so a destination
//! only ever receives a whole table.
//!
//! # Example
//!
//! ```rust,ignore
//! use sigtable::io::destinations::{FileDestination, MemoryDestination};
//!
//! // Write to file
//! let file_dest = FileDestination::new("std.go".into());
//! file_dest.write_str("package interfacer\n")?;
//!
//! // Write to memory (for testing)
//! let mem_dest = MemoryDestination::new();
//! mem_dest.write_str("package interfacer\n")?;
//! assert!(mem_dest.get_content().contains("interfacer"));
//! ```

use crate::errors::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Trait for destinations that can receive a rendered table.
pub trait OutputDestination: Send + Sync {
    /// Write string content to the destination.
    fn write_str(&self, content: &str) -> Result<(), Error>;

    /// Get a description of the destination for error messages.
    fn description(&self) -> String;
}

/// File system output destination.
///
/// The file is created (or truncated) on write, not on construction.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    /// Create a new file destination.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the path this destination writes to.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        let mut file = File::create(&self.path).map_err(|source| Error::SinkOpen {
            path: self.path.clone(),
            source,
        })?;
        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| Error::SinkWrite {
                destination: self.description(),
                source,
            })
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory output destination for testing.
///
/// Captures all output in a thread-safe buffer that can be inspected
/// after writing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl MemoryDestination {
    /// Create a new in-memory destination with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content of the buffer.
    pub fn get_content(&self) -> String {
        self.buffer
            .read()
            .map(|buffer| buffer.clone())
            .unwrap_or_default()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.read().map(|b| b.is_empty()).unwrap_or(true)
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        let mut buffer = self.buffer.write().map_err(|_| Error::SinkWrite {
            destination: self.description(),
            source: io::Error::other("buffer lock poisoned"),
        })?;
        buffer.push_str(content);
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// Standard output destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    /// Create a new stdout destination.
    pub fn new() -> Self {
        Self
    }
}

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .and_then(|_| handle.flush())
            .map_err(|source| Error::SinkWrite {
                destination: self.description(),
                source,
            })
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}

/// Pick the destination for an optional output path: a file when given,
/// stdout otherwise.
pub fn destination_for(output: Option<PathBuf>) -> Box<dyn OutputDestination> {
    match output {
        Some(path) => Box::new(FileDestination::new(path)),
        None => Box::new(StdoutDestination::new()),
    }
}
