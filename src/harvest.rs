//! Scope harvesting.
//!
//! Turns a resolved scope into the candidate signatures it offers to the
//! registries. The universe is harvested with every symbol included; regular
//! packages only offer exported symbols, and excluded packages are never
//! resolved at all.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{extract_signatures, PackagePath, Scope, Signature, Symbol, UNIVERSE};

/// Exact package paths that are never harvested, whatever the configuration.
pub const ALWAYS_EXCLUDED_PATHS: &[&str] = &["unsafe"];

/// Any package path containing one of these is never harvested.
pub const ALWAYS_EXCLUDED_SUBSTRINGS: &[&str] = &["internal"];

/// Packages that must never be offered as suggestions.
///
/// `unsafe` and every `internal` path are always excluded; the lists here
/// only add to that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionPolicy {
    /// Extra exact paths to skip
    #[serde(default)]
    pub paths: Vec<String>,
    /// Extra substrings; any path containing one is skipped
    #[serde(default)]
    pub substrings: Vec<String>,
}

impl ExclusionPolicy {
    pub fn is_excluded(&self, path: &str) -> bool {
        ALWAYS_EXCLUDED_PATHS.contains(&path)
            || ALWAYS_EXCLUDED_SUBSTRINGS.iter().any(|s| path.contains(*s))
            || self.paths.iter().any(|p| p == path)
            || self.substrings.iter().any(|s| path.contains(s.as_str()))
    }
}

/// Candidates harvested from a single scope, ready for the registries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Harvest {
    pub package: PackagePath,
    pub interfaces: Vec<(Signature, Symbol)>,
    pub functions: Vec<(Signature, Symbol)>,
}

impl Harvest {
    pub fn len(&self) -> usize {
        self.interfaces.len() + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty() && self.functions.is_empty()
    }
}

/// Harvest the universal scope. Builtins have no export concept, so every
/// symbol is kept.
pub fn harvest_universe(scope: &Scope) -> Harvest {
    harvest_scope(UNIVERSE, scope, true)
}

/// Harvest a package scope, keeping only exported symbols.
pub fn harvest_package(path: &str, scope: &Scope) -> Harvest {
    harvest_scope(path, scope, false)
}

fn harvest_scope(path: &str, scope: &Scope, include_unexported: bool) -> Harvest {
    let extracted = extract_signatures(scope);
    Harvest {
        package: path.to_string(),
        interfaces: select(extracted.interfaces, include_unexported),
        functions: select(extracted.functions, include_unexported),
    }
}

// Visibility filter runs before local dedup: an unexported declaration never
// hides an exported one with the same shape.
fn select(
    candidates: Vec<(Signature, Symbol)>,
    include_unexported: bool,
) -> Vec<(Signature, Symbol)> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|(_, symbol)| include_unexported || symbol.exported)
        .filter(|(sig, _)| seen.insert(sig.clone()))
        .collect()
}
