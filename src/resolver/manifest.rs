use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::{ResolveError, ScopeResolver};
use crate::core::Scope;

/// File name of a package's scope manifest inside its directory.
pub const SCOPE_MANIFEST: &str = "scope.json";

/// File name of the universe manifest at the root.
pub const UNIVERSE_MANIFEST: &str = "universe.json";

/// Resolver reading JSON scope manifests from a directory tree.
///
/// Package `encoding/json` resolves to `<root>/encoding/json/scope.json`. The
/// universe is read from `<root>/universe.json`, falling back to
/// [`Scope::builtin_universe`] when that file does not exist.
#[derive(Debug, Clone)]
pub struct ManifestResolver {
    root: PathBuf,
}

impl ManifestResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the manifest for `path`, rejecting paths that could
    /// escape the root.
    pub fn manifest_path(&self, path: &str) -> Result<PathBuf, ResolveError> {
        let relative = Path::new(path);
        let valid = !path.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(ResolveError::InvalidPath {
                path: path.to_string(),
            });
        }
        Ok(self.root.join(relative).join(SCOPE_MANIFEST))
    }
}

fn read_scope(file: &Path) -> Result<Option<Scope>, ResolveError> {
    let contents = match fs::read_to_string(file) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ResolveError::Io {
                file: file.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| ResolveError::Malformed {
            file: file.to_path_buf(),
            source,
        })
}

impl ScopeResolver for ManifestResolver {
    fn universe(&self) -> Result<Scope, ResolveError> {
        let file = self.root.join(UNIVERSE_MANIFEST);
        match read_scope(&file)? {
            Some(scope) => {
                log::debug!("Loaded universe from {}", file.display());
                Ok(scope)
            }
            None => Ok(Scope::builtin_universe()),
        }
    }

    fn resolve(&self, path: &str) -> Result<Scope, ResolveError> {
        let file = self.manifest_path(path)?;
        read_scope(&file)?.ok_or_else(|| ResolveError::NotFound {
            path: path.to_string(),
        })
    }
}
