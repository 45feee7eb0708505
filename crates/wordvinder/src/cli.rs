//! Command-line interface for wordvinder.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wordvinder - strict parser for vision-model word-puzzle extracts
#[derive(Parser, Debug)]
#[command(name = "wordvinder")]
#[command(about = "Validate model-described word-puzzle boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse model output into a validated board
    Parse {
        /// File holding the model text (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long, default_value = "wordvinder.toml")]
        config: PathBuf,

        /// Use the legacy parser (suspicious words fail the parse)
        #[arg(long)]
        legacy: bool,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Look up the point value of a tile
    Points {
        /// Tile letter
        letter: String,

        /// Treat the tile as a blank
        #[arg(long)]
        blank: bool,
    },

    /// List supported (schema, game) pairs
    Schemas,
}
