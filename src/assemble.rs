//! Projection of the populated registries into the emitted table.
//!
//! Entries are grouped by owning package (universe first, then packages in
//! processing order) and sorted by qualified name within each group. The
//! layout is what keeps generated files byte-identical across runs.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::{PackagePath, Signature, UNIVERSE};
use crate::ordering::by_length;
use crate::registry::{Registries, SignatureRegistry};

/// One `signature -> qualified name` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub signature: Signature,
    pub name: String,
}

impl TableEntry {
    pub fn new(signature: impl Into<Signature>, name: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            name: name.into(),
        }
    }
}

/// The generated lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Processing order, recorded verbatim.
    pub packages: Vec<PackagePath>,
    pub interfaces: Vec<TableEntry>,
    pub functions: Vec<TableEntry>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty() && self.functions.is_empty()
    }
}

/// Build the final table from the registries and the processing order.
pub fn assemble(registries: &Registries, order: &[PackagePath]) -> Table {
    Table {
        packages: order.to_vec(),
        interfaces: project(&registries.interfaces, order),
        functions: project(&registries.functions, order),
    }
}

fn project(registry: &SignatureRegistry, order: &[PackagePath]) -> Vec<TableEntry> {
    let mut groups: HashMap<&str, Vec<TableEntry>> = HashMap::new();
    for (sig, entry) in registry.iter() {
        groups
            .entry(entry.package.as_str())
            .or_default()
            .push(TableEntry::new(sig.as_str(), entry.name.as_str()));
    }

    let mut result = Vec::with_capacity(registry.len());
    drain_group(&mut groups, UNIVERSE, &mut result);
    let mut visited = HashSet::new();
    for package in order {
        if visited.insert(package.as_str()) {
            drain_group(&mut groups, package, &mut result);
        }
    }

    // Only reachable when the registries were filled outside the pipeline.
    let mut leftovers: Vec<&str> = groups.keys().copied().collect();
    if !leftovers.is_empty() {
        log::warn!(
            "{} package group(s) not in processing order, appending",
            leftovers.len()
        );
        leftovers.sort_by(|a, b| by_length(a, b));
        for package in leftovers {
            drain_group(&mut groups, package, &mut result);
        }
    }

    result
}

fn drain_group(
    groups: &mut HashMap<&str, Vec<TableEntry>>,
    package: &str,
    out: &mut Vec<TableEntry>,
) {
    if let Some(mut entries) = groups.remove(package) {
        entries.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.signature.cmp(&b.signature))
        });
        out.extend(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[TableEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_universe_group_first_then_processing_order() {
        let mut registries = Registries::new();
        registries.interfaces.record("Sync() error", "os", "Syncer");
        registries.interfaces.record("Close() error", "io", "Closer");
        registries.interfaces.record("Error() string", "", "error");
        registries.interfaces.record("Read() error", "io", "Reader");

        let order = vec!["io".to_string(), "os".to_string()];
        let table = assemble(&registries, &order);

        assert_eq!(
            names(&table.interfaces),
            vec!["error", "io.Closer", "io.Reader", "os.Syncer"]
        );
        assert_eq!(table.packages, order);
        assert!(table.functions.is_empty());
    }

    #[test]
    fn test_groups_follow_order_not_name() {
        let mut registries = Registries::new();
        registries.functions.record("func() int", "zz", "A");
        registries.functions.record("func() bool", "bufio", "A");

        // "zz" is shorter, so it is processed (and emitted) first
        let order = vec!["zz".to_string(), "bufio".to_string()];
        let table = assemble(&registries, &order);
        assert_eq!(names(&table.functions), vec!["zz.A", "bufio.A"]);
    }

    #[test]
    fn test_duplicate_order_entries_emit_group_once() {
        let mut registries = Registries::new();
        registries.interfaces.record("Close() error", "io", "Closer");
        let order = vec!["io".to_string(), "io".to_string()];
        let table = assemble(&registries, &order);
        assert_eq!(table.interfaces.len(), 1);
        assert_eq!(table.packages.len(), 2);
    }

    #[test]
    fn test_unordered_groups_are_appended() {
        let mut registries = Registries::new();
        registries.interfaces.record("A()", "stray", "A");
        registries.interfaces.record("B()", "io", "B");
        let table = assemble(&registries, &["io".to_string()]);
        assert_eq!(names(&table.interfaces), vec!["io.B", "stray.A"]);
    }

    #[test]
    fn test_empty_registries() {
        let table = assemble(&Registries::new(), &[]);
        assert!(table.is_empty());
        assert_eq!(table, Table::default());
    }
}
