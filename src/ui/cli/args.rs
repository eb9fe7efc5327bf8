// Thu Jan 15 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "udon-type-exporter")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Rebuilds C# declarations from Udon extern names", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export declarations for a node definition dump
    Export(ExportArgs),
    /// Print the grammar record of a single extern name
    Parse(ParseArgs),
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[arg(short, long)]
    pub definitions: PathBuf,

    #[arg(short, long)]
    pub types: PathBuf,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub source_dump: Option<PathBuf>,

    #[arg(long)]
    pub no_preamble: bool,

    #[arg(long)]
    pub no_progress: bool,
}

impl ExportArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.definitions.exists() {
            return Err(format!("Definitions file does not exist: {}", self.definitions.display()));
        }
        if !self.types.exists() {
            return Err(format!("Type manifest does not exist: {}", self.types.display()));
        }
        if let Some(config) = &self.config {
            if !config.exists() {
                return Err(format!("Config file does not exist: {}", config.display()));
            }
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    pub symbol: String,

    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_command() {
        let args = Args::try_parse_from([
            "udon-type-exporter", "export",
            "--definitions", "defs.json",
            "--types", "types.json",
            "--output", "Out.cs",
            "--log-level", "debug",
        ]).unwrap();

        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::Export(export) => {
                assert_eq!(export.output, Some(PathBuf::from("Out.cs")));
                assert!(export.config.is_none());
                assert!(export.validate().is_err());
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_parse_symbol_command() {
        let args = Args::try_parse_from(["udon-type-exporter", "parse", "Foo.__Bar__SystemVoid", "--json"]).unwrap();
        assert!(matches!(args.command, Command::Parse(ParseArgs { json: true, .. })));
    }
}
