// Thu Jan 15 2026 - Alex

use super::args::{Args, Command, ExportArgs, ParseArgs};
use crate::config::ExporterConfig;
use crate::engine::Exporter;
use crate::resolver::ManifestResolver;
use crate::symbol::{GrammarParser, NodeDefinition};
use crate::ui::progress::PhaseProgress;
use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::sync::Arc;
use std::time::Instant;

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        self.setup_logging(&args)?;

        match args.command {
            Command::Export(export_args) => self.handle_export(export_args),
            Command::Parse(parse_args) => self.handle_parse(parse_args),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .context("Failed to initialise logging")?;

        Ok(())
    }

    fn status(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "[*]".blue(), message);
        }
    }

    fn load_config(&self, args: &ExportArgs) -> anyhow::Result<ExporterConfig> {
        let mut config = match &args.config {
            Some(path) => ExporterConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ExporterConfig::default(),
        };

        if let Some(output) = &args.output {
            config = config.with_output_file(output.clone());
        }
        if let Some(dump) = &args.source_dump {
            config = config.with_source_dump(dump.clone());
        }
        if args.no_preamble {
            config = config.with_preamble(false);
        }
        if args.no_progress || self.quiet {
            config = config.with_progress_bars(false);
        }

        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    fn handle_export(&self, args: ExportArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        let config = self.load_config(&args)?;
        let start = Instant::now();

        self.status(&format!("Loading type manifest: {}", args.types.display()));
        let resolver = ManifestResolver::load(&args.types)
            .with_context(|| format!("Failed to load type manifest {}", args.types.display()))?;

        self.status(&format!("Loading definitions: {}", args.definitions.display()));
        let json = fs::read_to_string(&args.definitions)
            .with_context(|| format!("Failed to read {}", args.definitions.display()))?;
        let definitions = NodeDefinition::load_all(&json)
            .with_context(|| format!("Failed to parse {}", args.definitions.display()))?;
        if !self.quiet {
            println!("{} {} types, {} definitions", "[+]".green(), resolver.len(), definitions.len());
        }

        let progress = if config.enable_progress_bars {
            PhaseProgress::new()
        } else {
            PhaseProgress::hidden()
        };
        let output_file = config.output_file.clone();
        let exporter = Exporter::new(Arc::new(resolver), config).with_progress(Box::new(progress));

        let output = exporter.run(&definitions);
        exporter.write(&output)?;

        if !self.quiet {
            println!("{} {}", "[+]".green(), output.stats);
            println!("{} {} declarations emitted", "[+]".green(), output.declarations);
            if output.diagnostics.has_errors() {
                println!("{} {}", "[!]".yellow(), output.diagnostics.summary());
            }
            println!("{} Done in {:.2?}", "[+]".green(), start.elapsed());
            println!("{}", format!("Output to: {}", output_file.display()).green());
        }
        Ok(())
    }

    fn handle_parse(&self, args: ParseArgs) -> anyhow::Result<()> {
        let grammar = GrammarParser::new().parse(&args.symbol)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&grammar)?);
            return Ok(());
        }

        println!("{}", grammar.to_string().cyan());
        println!("  {}: {}", "namespace".bold(), grammar.namespace);
        println!("  {}: {}", "kind".bold(), grammar.kind.name());
        println!("  {}: {}", "name".bold(), grammar.name);
        for (i, input) in grammar.inputs.iter().enumerate() {
            println!("  {} {}: {}", "input".bold(), i, input);
        }
        println!("  {}: {}", "output".bold(), grammar.output);
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
