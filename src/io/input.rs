//! Reading the package list.

use std::io::BufRead;

use crate::core::PackagePath;
use crate::errors::{Error, Result};

/// Read package paths, one per line.
///
/// Surrounding whitespace is trimmed and blank lines are ignored. Any read
/// failure (including invalid UTF-8) fails the whole read.
pub fn read_package_list<R: BufRead>(reader: R) -> Result<Vec<PackagePath>> {
    let mut packages = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| Error::InputRead { source })?;
        let path = line.trim();
        if !path.is_empty() {
            packages.push(path.to_string());
        }
    }
    Ok(packages)
}
