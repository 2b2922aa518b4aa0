//! Resolved scopes and the signatures extracted from them.

use serde::{Deserialize, Serialize};

use super::types::{Signature, Symbol};

/// Kind of a declaration found in a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    /// Interface-shaped type; contributes its method set
    Interface,
    /// Function or named function type; contributes its signature
    Func,
    Type,
    Const,
    Var,
}

/// A single declaration as delivered by a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,
    /// Methods of an interface declaration, one per entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    /// Parameter/result shape of a func declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl Declaration {
    pub fn interface<I, S>(name: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: DeclKind::Interface,
            methods: methods.into_iter().map(Into::into).collect(),
            signature: None,
        }
    }

    pub fn func(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DeclKind::Func,
            methods: Vec::new(),
            signature: Some(signature.into()),
        }
    }

    pub fn other(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
            methods: Vec::new(),
            signature: None,
        }
    }
}

/// The declarations of one package, or of the universe.
///
/// Declarations are kept sorted by name so that harvesting sees them in the
/// same order no matter how the resolver produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ScopeManifest", into = "ScopeManifest")]
pub struct Scope {
    declarations: Vec<Declaration>,
}

impl Scope {
    pub fn new(mut declarations: Vec<Declaration>) -> Self {
        declarations.sort_by(|a, b| a.name.cmp(&b.name));
        Self { declarations }
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// The builtin scope used when no universe manifest is supplied.
    pub fn builtin_universe() -> Self {
        Self::new(vec![
            Declaration::interface("error", ["Error() string"]),
            Declaration::other("any", DeclKind::Type),
            Declaration::other("bool", DeclKind::Type),
            Declaration::other("byte", DeclKind::Type),
            Declaration::other("int", DeclKind::Type),
            Declaration::other("rune", DeclKind::Type),
            Declaration::other("string", DeclKind::Type),
            Declaration::other("true", DeclKind::Const),
            Declaration::other("false", DeclKind::Const),
            Declaration::other("nil", DeclKind::Var),
        ])
    }
}

/// On-disk shape of a scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScopeManifest {
    #[serde(default)]
    declarations: Vec<Declaration>,
}

impl From<ScopeManifest> for Scope {
    fn from(manifest: ScopeManifest) -> Self {
        Scope::new(manifest.declarations)
    }
}

impl From<Scope> for ScopeManifest {
    fn from(scope: Scope) -> Self {
        Self {
            declarations: scope.declarations,
        }
    }
}

/// Signatures found in one scope, in declaration order. The same signature
/// may appear more than once when several declarations share a shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSignatures {
    pub interfaces: Vec<(Signature, Symbol)>,
    pub functions: Vec<(Signature, Symbol)>,
}

/// Canonical form of an interface method set: trimmed, sorted, deduplicated,
/// joined with `"; "`. Returns `None` for an empty method set.
pub fn method_set_signature<S: AsRef<str>>(methods: &[S]) -> Option<Signature> {
    let mut methods: Vec<&str> = methods
        .iter()
        .map(|m| m.as_ref().trim())
        .filter(|m| !m.is_empty())
        .collect();
    if methods.is_empty() {
        return None;
    }
    methods.sort_unstable();
    methods.dedup();
    Some(methods.join("; "))
}

/// Extract every interface and function signature declared in `scope`.
///
/// Visibility is not consulted here; it is recorded on each [`Symbol`] and
/// applied by the harvester.
pub fn extract_signatures(scope: &Scope) -> ExtractedSignatures {
    let mut out = ExtractedSignatures::default();
    for decl in scope.declarations() {
        match decl.kind {
            DeclKind::Interface => match method_set_signature(&decl.methods) {
                Some(sig) => out.interfaces.push((sig, Symbol::new(&decl.name))),
                None => log::trace!("skipping empty interface {}", decl.name),
            },
            DeclKind::Func => match decl.signature.as_deref().map(str::trim) {
                Some(sig) if !sig.is_empty() => {
                    out.functions.push((sig.to_string(), Symbol::new(&decl.name)))
                }
                _ => log::warn!("func declaration {} has no signature, skipping", decl.name),
            },
            DeclKind::Type | DeclKind::Const | DeclKind::Var => {}
        }
    }
    out
}
