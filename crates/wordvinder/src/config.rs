//! Runtime configuration for the command-line front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a parse run, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ExtractConfig {
    /// Pretty-print the JSON report.
    #[serde(default = "default_pretty")]
    pretty: bool,

    /// Attach the board summary on success.
    #[serde(default = "default_include_summary")]
    include_summary: bool,

    /// Use the legacy single-schema parser, which fails on suspicious words.
    #[serde(default)]
    legacy_strict: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_pretty() -> bool {
    true
}

fn default_include_summary() -> bool {
    true
}

fn default_log_filter() -> String {
    "info,wordvinder=debug,wordvinder_core=debug".to_string()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            include_summary: default_include_summary(),
            legacy_strict: false,
            log_filter: default_log_filter(),
        }
    }
}

impl ExtractConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::at(ConfigStage::Read, path, e))?;

        let config: Self =
            toml::from_str(&content).map_err(|e| ConfigError::at(ConfigStage::Parse, path, e))?;

        info!(legacy_strict = config.legacy_strict, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Which step of loading a config file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigStage {
    /// The file could not be read.
    #[display("read")]
    Read,
    /// The file is not valid TOML for [`ExtractConfig`].
    #[display("parse")]
    Parse,
}

/// A config file that could not be loaded.
#[derive(Debug, Clone, Display, Error)]
#[display("cannot {} {}: {} at {}:{}", stage, path.display(), reason, file, line)]
pub struct ConfigError {
    /// Failed step.
    pub stage: ConfigStage,
    /// Offending file.
    pub path: PathBuf,
    /// Underlying reason.
    pub reason: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    #[track_caller]
    fn at(stage: ConfigStage, path: &Path, reason: impl ToString) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            stage,
            path: path.to_path_buf(),
            reason: reason.to_string(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
