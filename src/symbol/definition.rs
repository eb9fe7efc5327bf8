// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

pub const VOID_TYPE: &str = "System.Void";

/// One entry of the node definition stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDefinition {
    pub full_name: String,
    #[serde(default)]
    pub input_names: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl NodeDefinition {
    pub fn new(full_name: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            input_names: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_inputs(mut self, names: &[&str]) -> Self {
        self.input_names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_output(mut self, type_name: &str) -> Self {
        self.outputs.push(type_name.to_string());
        self
    }

    /// Number of non-void outputs the extern pushes, looking only at the first slot.
    pub fn output_count(&self) -> usize {
        match self.outputs.first() {
            Some(first) if first != VOID_TYPE => 1,
            _ => 0,
        }
    }

    pub fn first_input_name(&self) -> Option<&str> {
        self.input_names.first().map(String::as_str)
    }

    pub fn load_all(json: &str) -> Result<Vec<NodeDefinition>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for NodeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}
