//! Command-line parsing for `propmap`.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! extraction and formatting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{CompleteConfig, DEFAULT_INPUT, ExtractConfig};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "propmap", version, about = "Script property path taxonomy extractor")]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the key count and the key -> successors literal.
    Dump(DumpArgs),
    /// Print completion candidates for a partially typed path.
    Complete(CompleteArgs),
}

/// Input options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Script properties XML file.
    #[arg(short = 'f', long, env = "PROPMAP_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct DumpArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also write the taxonomy to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Print an ingest summary before the literal.
    #[arg(long)]
    pub summary: bool,
}

impl DumpArgs {
    pub fn to_config(&self) -> ExtractConfig {
        ExtractConfig {
            input: self.input.input.clone(),
            export: self.export.clone(),
            summary: self.summary,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct CompleteArgs {
    /// Text typed so far, e.g. `player.ship.own`.
    pub typed: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Levels to walk below each matching key.
    #[arg(long, default_value_t = 3)]
    pub max_depth: usize,

    /// Offer nothing until at least this many characters are typed.
    #[arg(long, default_value_t = 0)]
    pub min_chars: usize,
}

impl CompleteArgs {
    pub fn to_config(&self) -> CompleteConfig {
        CompleteConfig {
            max_depth: self.max_depth,
            min_chars: self.min_chars,
        }
    }
}
