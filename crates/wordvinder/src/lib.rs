//! Wordvinder command-line support library.
//!
//! Configuration loading and report rendering for the `wordvinder` binary.
//! All parsing lives in `wordvinder_core`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod report;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigStage, ExtractConfig};

// Crate-level exports - Reporting
pub use report::{Outcome, Report};
