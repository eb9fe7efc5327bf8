// Tue Jan 13 2026 - Alex

use crate::symbol::NodeDefinition;

pub const IGNORED_DEFINITIONS: &[&str] = &[
    "Block",
    "Branch",
    "While",
    "For",
    "Get_Variable",
    "Set_Variable",
    "SubGraph",
    "Comment",
];

pub const IGNORED_PREFIXES: &[&str] = &["Variable_", "Event_", "Const_", "Type_"];

/// Drops graph structure nodes and declaration nodes that never name an extern.
#[derive(Debug, Clone)]
pub struct SymbolFilter {
    definitions: Vec<String>,
    prefixes: Vec<String>,
}

impl SymbolFilter {
    pub fn new() -> Self {
        Self {
            definitions: IGNORED_DEFINITIONS.iter().map(|s| s.to_string()).collect(),
            prefixes: IGNORED_PREFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_lists(definitions: Vec<String>, prefixes: Vec<String>) -> Self {
        Self { definitions, prefixes }
    }

    pub fn is_special(&self, symbol: &str) -> bool {
        self.definitions.iter().any(|d| d == symbol)
    }

    pub fn has_ignored_prefix(&self, symbol: &str) -> bool {
        self.prefixes.iter().any(|p| symbol.starts_with(p.as_str()))
    }

    pub fn is_ignored(&self, symbol: &str) -> bool {
        self.is_special(symbol) || self.has_ignored_prefix(symbol)
    }

    pub fn accepts(&self, definition: &NodeDefinition) -> bool {
        !self.is_ignored(&definition.full_name)
    }
}

impl Default for SymbolFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_nodes_ignored() {
        let filter = SymbolFilter::new();
        assert!(filter.is_ignored("Block"));
        assert!(filter.is_ignored("Set_Variable"));
        assert!(filter.is_ignored("Comment"));
        assert!(!filter.is_ignored("BlockFoo.__Bar__SystemVoid"));
    }

    #[test]
    fn test_declaration_prefixes_ignored() {
        let filter = SymbolFilter::new();
        assert!(filter.is_ignored("Variable_SystemInt32"));
        assert!(filter.is_ignored("Event_Start"));
        assert!(filter.is_ignored("Const_SystemString"));
        assert!(filter.is_ignored("Type_SystemType"));
        assert!(!filter.accepts(&NodeDefinition::new("Event_Interact")));
        assert!(filter.accepts(&NodeDefinition::new("UnityEngineDebug.__Log__SystemObject__SystemVoid")));
    }
}
