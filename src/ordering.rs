//! Deterministic processing order for package paths.
//!
//! Shorter paths are treated as more fundamental and are harvested first, so
//! they win whenever a signature is ambiguous. Equal lengths fall back to
//! plain byte order. Duplicates are kept; the registry ignores repeats.

use std::cmp::Ordering;

use crate::core::PackagePath;

/// Compare two package paths by length, then lexicographically.
pub fn by_length(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Sort `paths` into processing order.
pub fn processing_order<I, S>(paths: I) -> Vec<PackagePath>
where
    I: IntoIterator<Item = S>,
    S: Into<PackagePath>,
{
    let mut order: Vec<PackagePath> = paths.into_iter().map(Into::into).collect();
    order.sort_by(|a, b| by_length(a, b));
    order
}
