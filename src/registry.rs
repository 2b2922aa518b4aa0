//! First-writer-wins signature registries.
//!
//! A registry maps each signature to the qualified name that first claimed it.
//! Later candidates for the same signature are dropped, which is what turns
//! the processing order into a precedence order.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::core::{qualified_name, PackagePath, Signature};
use crate::harvest::Harvest;

/// The winning declaration for a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Owning package; empty for the universe.
    pub package: PackagePath,
    /// Qualified name as emitted in the table.
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct SignatureRegistry {
    entries: HashMap<Signature, RegistryEntry>,
}

impl SignatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `signature` with `package.name` unless it is already taken.
    ///
    /// Returns `true` when the candidate was recorded.
    pub fn record(&mut self, signature: &str, package: &str, name: &str) -> bool {
        match self.entries.entry(signature.to_string()) {
            Entry::Occupied(existing) => {
                log::trace!(
                    "{:?}: keeping {}, dropping {}",
                    signature,
                    existing.get().name,
                    qualified_name(package, name)
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(RegistryEntry {
                    package: package.to_string(),
                    name: qualified_name(package, name),
                });
                true
            }
        }
    }

    pub fn get(&self, signature: &str) -> Option<&RegistryEntry> {
        self.entries.get(signature)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in arbitrary order. Use the assembler for stable output.
    pub fn iter(&self) -> impl Iterator<Item = (&Signature, &RegistryEntry)> {
        self.entries.iter()
    }
}

/// The interface and function registries populated during one run.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub interfaces: SignatureRegistry,
    pub functions: SignatureRegistry,
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every candidate from one harvested scope.
    ///
    /// Must be called in processing order, universe first.
    pub fn absorb(&mut self, harvest: &Harvest) -> AbsorbStats {
        let mut stats = AbsorbStats::default();
        for (sig, symbol) in &harvest.interfaces {
            if self.interfaces.record(sig, &harvest.package, &symbol.name) {
                stats.interfaces += 1;
            } else {
                stats.shadowed += 1;
            }
        }
        for (sig, symbol) in &harvest.functions {
            if self.functions.record(sig, &harvest.package, &symbol.name) {
                stats.functions += 1;
            } else {
                stats.shadowed += 1;
            }
        }
        stats
    }
}

/// Counts of what one [`Registries::absorb`] call contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsorbStats {
    pub interfaces: usize,
    pub functions: usize,
    /// Candidates dropped because an earlier scope already claimed the signature.
    pub shadowed: usize,
}
