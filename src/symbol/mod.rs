// Tue Jan 13 2026 - Alex

pub mod definition;
pub mod error;
pub mod filter;
pub mod grammar;
pub mod naming;

pub use definition::{NodeDefinition, VOID_TYPE};
pub use error::SymbolError;
pub use filter::SymbolFilter;
pub use grammar::{GrammarParser, MethodGrammar, MethodKind};

pub fn parse_symbol(symbol: &str) -> Result<MethodGrammar, SymbolError> {
    GrammarParser::new().parse(symbol)
}
