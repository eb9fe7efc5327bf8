// Tue Jan 13 2026 - Alex

use crate::emit::EmitOptions;
use crate::symbol::filter::{IGNORED_DEFINITIONS, IGNORED_PREFIXES};
use crate::symbol::grammar::DEFAULT_ESCAPE_TOKENS;
use crate::symbol::{GrammarParser, SymbolFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    pub output_file: PathBuf,
    pub source_dump: Option<PathBuf>,
    pub escape_tokens: Vec<String>,
    pub ignored_definitions: Vec<String>,
    pub ignored_prefixes: Vec<String>,
    pub array_ctor_prefix: String,
    pub holder_suffix: String,
    pub receiver_name: String,
    pub emit_preamble: bool,
    pub max_errors: usize,
    pub enable_progress_bars: bool,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        let emit = EmitOptions::default();
        Self {
            output_file: PathBuf::from("UdonNodeInfo.cs"),
            source_dump: None,
            escape_tokens: DEFAULT_ESCAPE_TOKENS.iter().map(|s| s.to_string()).collect(),
            ignored_definitions: IGNORED_DEFINITIONS.iter().map(|s| s.to_string()).collect(),
            ignored_prefixes: IGNORED_PREFIXES.iter().map(|s| s.to_string()).collect(),
            array_ctor_prefix: emit.array_ctor_prefix,
            holder_suffix: emit.holder_suffix,
            receiver_name: emit.receiver_name,
            emit_preamble: emit.emit_preamble,
            max_errors: 1000,
            enable_progress_bars: true,
        }
    }
}

impl ExporterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let config: ExporterConfig = serde_json::from_str(&json)?;
        Ok(config)
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = output;
        self
    }

    pub fn with_source_dump(mut self, path: PathBuf) -> Self {
        self.source_dump = Some(path);
        self
    }

    pub fn with_escape_token(mut self, token: &str) -> Self {
        self.escape_tokens.push(token.to_string());
        self
    }

    pub fn with_preamble(mut self, enabled: bool) -> Self {
        self.emit_preamble = enabled;
        self
    }

    pub fn with_progress_bars(mut self, enabled: bool) -> Self {
        self.enable_progress_bars = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.output_file.as_os_str().is_empty() {
            return Err("output_file must be set".to_string());
        }
        if self.escape_tokens.iter().any(|t| !t.contains('_')) {
            return Err("escape_tokens must contain an underscore".to_string());
        }
        if self.array_ctor_prefix.is_empty() {
            return Err("array_ctor_prefix must not be empty".to_string());
        }
        if self.holder_suffix.is_empty() {
            return Err("holder_suffix must not be empty".to_string());
        }
        if self.receiver_name.is_empty() {
            return Err("receiver_name must not be empty".to_string());
        }
        if self.max_errors == 0 {
            return Err("max_errors must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn parser(&self) -> GrammarParser {
        GrammarParser::with_escape_tokens(self.escape_tokens.clone())
    }

    pub fn filter(&self) -> SymbolFilter {
        SymbolFilter::with_lists(self.ignored_definitions.clone(), self.ignored_prefixes.clone())
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            array_ctor_prefix: self.array_ctor_prefix.clone(),
            holder_suffix: self.holder_suffix.clone(),
            receiver_name: self.receiver_name.clone(),
            emit_preamble: self.emit_preamble,
        }
    }
}
