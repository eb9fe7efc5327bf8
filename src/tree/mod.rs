// Tue Jan 13 2026 - Alex

pub mod arena;
pub mod builder;
pub mod classify;
pub mod error;
pub mod generics;
pub mod inheritance;
pub mod layout;
pub mod method;
pub mod node;

pub use arena::TypeTree;
pub use builder::{Attachment, BuildStats, BuiltTree, TreeBuilder};
pub use error::TreeError;
pub use generics::GenericExpression;
pub use layout::{DeclGroup, TreeLayout};
pub use method::MethodRecord;
pub use node::{Classification, ExtensionKind, NodeId, NodeKey, TypeNode};
