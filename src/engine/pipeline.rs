// Tue Jan 13 2026 - Alex

use crate::config::ExporterConfig;
use crate::diagnostics::Diagnostics;
use crate::emit::DeclarationEmitter;
use crate::resolver::TypeResolver;
use crate::symbol::NodeDefinition;
use crate::tree::{BuildStats, TreeBuilder, TreeLayout};
use anyhow::Context;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Finalize,
    Emit,
    Write,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Parse, Phase::Finalize, Phase::Emit, Phase::Write];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Parse => "Parsing definitions",
            Phase::Finalize => "Resolving inheritance",
            Phase::Emit => "Emitting declarations",
            Phase::Write => "Writing output",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Receives coarse progress at phase boundaries. There is no cancellation.
pub trait ProgressSink {
    fn phase_started(&self, phase: Phase);
    fn phase_finished(&self, phase: Phase);
    fn definitions_processed(&self, _count: usize, _total: usize) {}
}

pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn phase_started(&self, _phase: Phase) {}
    fn phase_finished(&self, _phase: Phase) {}
}

#[derive(Debug)]
pub struct ExportOutput {
    pub text: String,
    pub diagnostics: Diagnostics,
    pub stats: BuildStats,
    pub declarations: usize,
}

/// Runs build then emit over a full batch of definitions.
pub struct Exporter {
    resolver: Arc<dyn TypeResolver>,
    config: ExporterConfig,
    progress: Box<dyn ProgressSink>,
}

impl Exporter {
    const PROGRESS_STEP: usize = 500;

    pub fn new(resolver: Arc<dyn TypeResolver>, config: ExporterConfig) -> Self {
        Self {
            resolver,
            config,
            progress: Box::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &ExporterConfig {
        &self.config
    }

    pub fn run(&self, definitions: &[NodeDefinition]) -> ExportOutput {
        self.progress.phase_started(Phase::Parse);
        let mut builder = TreeBuilder::new(self.resolver.clone())
            .with_parser(self.config.parser())
            .with_filter(self.config.filter())
            .with_diagnostics(Diagnostics::new().with_max_errors(self.config.max_errors));

        let total = definitions.len();
        for (i, definition) in definitions.iter().enumerate() {
            builder.add_definition(definition);
            if (i + 1) % Self::PROGRESS_STEP == 0 || i + 1 == total {
                self.progress.definitions_processed(i + 1, total);
            }
        }
        log::info!("{}", builder.stats());
        self.progress.phase_finished(Phase::Parse);

        self.progress.phase_started(Phase::Finalize);
        let mut built = builder.finish();
        log::info!("Tree has {} nodes and {} methods", built.tree.len(), built.tree.method_count());
        self.progress.phase_finished(Phase::Finalize);

        self.progress.phase_started(Phase::Emit);
        let layout = TreeLayout::build(&built.tree, &mut built.diagnostics);
        let emitter = DeclarationEmitter::new(self.config.emit_options());
        let text = emitter.emit(&built.tree, &layout, &mut built.diagnostics);
        self.progress.phase_finished(Phase::Emit);

        ExportOutput {
            text,
            diagnostics: built.diagnostics,
            stats: built.stats,
            declarations: layout.len(),
        }
    }

    /// Writes the declaration text to the configured output and the optional source dump.
    pub fn write(&self, output: &ExportOutput) -> anyhow::Result<()> {
        self.progress.phase_started(Phase::Write);
        write_text(&self.config.output_file, &output.text)?;
        if let Some(dump) = &self.config.source_dump {
            write_text(dump, &output.text)?;
        }
        self.progress.phase_finished(Phase::Write);
        Ok(())
    }
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
