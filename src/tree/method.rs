// Tue Jan 13 2026 - Alex

use crate::symbol::MethodKind;
use crate::tree::NodeId;
use std::fmt;

/// One bindable extern attached to a type node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    pub extern_name: String,
    pub kind: MethodKind,
    pub name: String,
    pub is_static: bool,
    pub inputs: Vec<NodeId>,
    /// `None` when the symbol has an empty output segment.
    pub output: Option<NodeId>,
}

impl MethodRecord {
    pub fn new(extern_name: &str, kind: MethodKind, name: &str) -> Self {
        Self {
            extern_name: extern_name.to_string(),
            kind,
            name: name.to_string(),
            is_static: false,
            inputs: Vec::new(),
            output: None,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<NodeId>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_output(mut self, output: Option<NodeId>) -> Self {
        self.output = output;
        self
    }

    pub fn references(&self, node: NodeId) -> bool {
        self.output == Some(node) || self.inputs.contains(&node)
    }

    pub fn referenced_types(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inputs.iter().copied().chain(self.output)
    }
}

impl fmt::Display for MethodRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extern_name)
    }
}
