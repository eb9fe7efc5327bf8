// Tue Jan 13 2026 - Alex

pub mod error;
pub mod manifest;

pub use error::ResolverError;
pub use manifest::{ManifestResolver, TypeEntry, TypeKind, TypeManifest};

use crate::symbol::naming;
use std::fmt;

/// Opaque handle for a type known to the host type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub usize);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only oracle over the host type system.
///
/// Implementations must be deterministic for the duration of one export run;
/// the tree builder calls into it freely and caches nothing.
pub trait TypeResolver {
    /// Looks up a type by the token the extern grammar uses for it.
    fn resolve(&self, name: &str) -> Option<TypeId>;

    /// Dotted full name, nested types joined with `.` and generics as `Name<Arg, Arg>`.
    fn full_name(&self, id: TypeId) -> String;

    fn declared_interfaces(&self, id: TypeId) -> Vec<TypeId>;

    fn ancestor(&self, id: TypeId) -> Option<TypeId>;

    fn is_value_type(&self, id: TypeId) -> bool;

    fn is_enum(&self, id: TypeId) -> bool;

    fn is_interface(&self, id: TypeId) -> bool;

    fn enum_member_names(&self, id: TypeId) -> Vec<String>;

    /// Parameter count the runtime wrapper expects for an extern, outputs included.
    fn extern_parameter_count(&self, symbol: &str) -> Result<usize, ResolverError>;

    fn resolve_strict(&self, name: &str) -> Result<TypeId, ResolverError> {
        self.resolve(name)
            .ok_or_else(|| ResolverError::UnresolvedTypeName(name.to_string()))
    }

    fn grammar_name(&self, id: TypeId) -> String {
        naming::grammar_name(&self.full_name(id))
    }

    /// True when the type can be looked up again by its own grammar name.
    fn is_bindable(&self, id: TypeId) -> bool {
        self.resolve(&self.grammar_name(id)) == Some(id)
    }
}
