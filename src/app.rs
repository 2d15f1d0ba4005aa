//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - installs the log subscriber
//! - runs the extraction pipeline
//! - prints the literal, summary or completions
//! - writes the optional JSON export

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, CompleteArgs, DumpArgs};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `propmap` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // `propmap` and `propmap -f FILE` behave like `propmap dump ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_logging(cli.verbose);

    match cli.command {
        Command::Dump(args) => handle_dump(args),
        Command::Complete(args) => handle_complete(args),
    }
}

/// Log to stderr so stdout carries only the requested output.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_dump(args: DumpArgs) -> Result<(), AppError> {
    let config = args.to_config();
    let run = pipeline::run_extract(&config.input)?;

    if config.summary {
        println!(
            "{}",
            crate::report::format_run_summary(
                &config.input,
                &run.stats,
                &run.document.skipped,
                run.taxonomy.key_count(),
            )
        );
    }

    println!("{}", crate::report::format_taxonomy_literal(&run.taxonomy));

    if let Some(path) = &config.export {
        crate::io::export::write_taxonomy_json(path, &run.taxonomy, &config.input)?;
    }

    Ok(())
}

fn handle_complete(args: CompleteArgs) -> Result<(), AppError> {
    if args.max_depth == 0 {
        return Err(AppError::usage("--max-depth must be at least 1."));
    }

    let run = pipeline::run_extract(&args.input.input)?;
    let candidates = crate::complete::complete(&run.taxonomy, &args.typed, &args.to_config());
    tracing::debug!(typed = %args.typed, candidates = candidates.len(), "completion lookup");

    if !candidates.is_empty() {
        println!("{}", crate::report::format_completions(&candidates));
    }
    Ok(())
}

/// Rewrite argv so `propmap` defaults to `propmap dump`.
///
/// Rules:
/// - `propmap`                      -> `propmap dump`
/// - `propmap -f FILE ...`          -> `propmap dump -f FILE ...`
/// - `propmap --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("dump".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "dump" | "complete");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "dump flags".
    if arg1.starts_with('-') {
        argv.insert(1, "dump".to_string());
        return argv;
    }

    argv
}
