use std::collections::HashMap;

use super::{ResolveError, ScopeResolver};
use crate::core::Scope;

/// Resolver backed by scopes held in memory.
///
/// Unknown paths fail with [`ResolveError::NotFound`], which makes it easy to
/// exercise the fatal-resolution path in tests.
#[derive(Debug, Clone)]
pub struct MemoryResolver {
    universe: Scope,
    packages: HashMap<String, Scope>,
}

impl Default for MemoryResolver {
    fn default() -> Self {
        Self::new(Scope::builtin_universe())
    }
}

impl MemoryResolver {
    pub fn new(universe: Scope) -> Self {
        Self {
            universe,
            packages: HashMap::new(),
        }
    }

    /// Add or replace the scope for `path`.
    pub fn with_package(mut self, path: impl Into<String>, scope: Scope) -> Self {
        self.insert(path, scope);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, scope: Scope) {
        self.packages.insert(path.into(), scope);
    }
}

impl ScopeResolver for MemoryResolver {
    fn universe(&self) -> Result<Scope, ResolveError> {
        Ok(self.universe.clone())
    }

    fn resolve(&self, path: &str) -> Result<Scope, ResolveError> {
        self.packages
            .get(path)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                path: path.to_string(),
            })
    }
}
