// Thu Jan 15 2026 - Alex

pub mod class;
pub mod emitter;
pub mod error;
pub mod field;
pub mod operators;
pub mod preamble;

pub use class::{ClassDecl, DeclKind, MemberDecl};
pub use emitter::{DeclarationEmitter, EmitOptions};
pub use error::EmitError;
pub use field::{FieldSet, FieldSlot};
pub use operators::{classify_operator, Conversion, OperatorForm};
