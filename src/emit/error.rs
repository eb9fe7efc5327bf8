// Thu Jan 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    #[error("Unhandled operator {name} in {extern_name}")]
    UnhandledOperatorToken { name: String, extern_name: String },
}
