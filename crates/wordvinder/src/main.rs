//! Wordvinder - command-line front end
//!
//! Reads model text from a file or stdin, validates it and prints a JSON report.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;
use wordvinder::{ExtractConfig, Report};
use wordvinder_core::{SCHEMA_TABLE, letter_points, parse_legacy_model_output, parse_model_output};

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            input,
            config,
            legacy,
            compact,
        } => run_parse(input, &config, legacy, compact),
        Command::Points { letter, blank } => {
            initialize_tracing(ExtractConfig::default().log_filter());
            run_points(&letter, blank)
        }
        Command::Schemas => {
            for (schema, game, _) in SCHEMA_TABLE {
                println!("{}\t{}", schema, game);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Parse model text and print the report
fn run_parse(
    input: Option<PathBuf>,
    config_path: &Path,
    legacy: bool,
    compact: bool,
) -> Result<ExitCode> {
    let mut config = ExtractConfig::load_or_default(config_path)?;
    if legacy {
        config = config.with_legacy_strict(true);
    }
    if compact {
        config = config.with_pretty(false);
    }
    initialize_tracing(config.log_filter());

    let text = read_input(input.as_deref())?;
    info!(
        bytes = text.len(),
        legacy = *config.legacy_strict(),
        "Parsing model output"
    );

    let result = if *config.legacy_strict() {
        parse_legacy_model_output(&text)
    } else {
        parse_model_output(&text)
    };

    let (report, outcome) = Report::new(result, *config.include_summary());
    println!("{}", report.render(*config.pretty())?);
    Ok(ExitCode::from(outcome.exit_code()))
}

/// Print the point value of a single tile
#[instrument]
fn run_points(letter: &str, blank: bool) -> Result<ExitCode> {
    match letter_points(letter, blank) {
        Some(points) => {
            println!("{}", points);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            warn!(letter, "Not a tile letter");
            eprintln!("not a tile letter: {:?}", letter);
            Ok(ExitCode::from(2))
        }
    }
}

#[instrument]
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read model output from stdin")?;
            Ok(text)
        }
    }
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
