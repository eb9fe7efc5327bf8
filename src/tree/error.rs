// Tue Jan 13 2026 - Alex

use crate::resolver::ResolverError;
use crate::symbol::SymbolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error(transparent)]
    Symbol(#[from] SymbolError),
    #[error(transparent)]
    Resolver(#[from] ResolverError),
    #[error("Parent class not created {0}")]
    ParentNotFound(String),
    #[error("Could not generate proper name for {type_name}. Generated: {generated}")]
    ImproperGrammarName { type_name: String, generated: String },
}
