pub mod scope;
pub mod types;

pub use scope::{
    extract_signatures, method_set_signature, DeclKind, Declaration, ExtractedSignatures, Scope,
};
pub use types::{is_exported, qualified_name, PackagePath, Signature, Symbol, UNIVERSE};
