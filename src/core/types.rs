//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};

/// Import path of a package. Opaque apart from the exclusion rules.
pub type PackagePath = String;

/// Canonical string for a method set or a function shape.
pub type Signature = String;

/// Path of the universal (builtin) scope.
pub const UNIVERSE: &str = "";

/// A declared name together with its visibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub exported: bool,
}

impl Symbol {
    /// Create a symbol, deriving visibility from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let exported = is_exported(&name);
        Self { name, exported }
    }
}

/// A name is visible outside its package when it starts with an uppercase letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Join a package path and a name, leaving universe names bare.
pub fn qualified_name(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_universe_is_bare() {
        assert_eq!(qualified_name(UNIVERSE, "error"), "error");
        assert_eq!(qualified_name("io", "Reader"), "io.Reader");
        assert_eq!(
            qualified_name("encoding/json", "Marshaler"),
            "encoding/json.Marshaler"
        );
    }

    #[test]
    fn test_is_exported() {
        assert!(is_exported("Reader"));
        assert!(is_exported("Ñame"));
        assert!(!is_exported("reader"));
        assert!(!is_exported("_Reader"));
        assert!(!is_exported(""));
    }

    #[test]
    fn test_symbol_new_derives_visibility() {
        assert!(Symbol::new("Writer").exported);
        assert!(!Symbol::new("error").exported);
    }
}
