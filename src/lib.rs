// Tue Jan 13 2026 - Alex

pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod engine;
pub mod resolver;
pub mod symbol;
pub mod tree;
pub mod ui;

pub use config::ExporterConfig;
pub use diagnostics::Diagnostics;
pub use emit::DeclarationEmitter;
pub use engine::{ExportOutput, Exporter};
pub use resolver::{ManifestResolver, TypeResolver};
pub use symbol::{parse_symbol, GrammarParser, NodeDefinition};
pub use tree::{TreeBuilder, TypeTree};
