//! Error taxonomy for model-output parsing.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, warn};

/// Machine-readable failure code.
///
/// The set is closed: every rejection in the pipeline maps to exactly one of these.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Text is not a string, does not look like a JSON object, or fails to parse.
    ModelOutputNotJson,
    /// Decoded value fails a shape, type, range or allow-list check.
    ModelOutputSchemaInvalid,
    /// A well-formed solved word matched a content-policy token (legacy path).
    ModelOutputSuspicious,
}

impl ErrorCode {
    /// Whether callers should treat this code as "parsed but flagged" rather
    /// than as a hard failure.
    pub fn is_flag_only(self) -> bool {
        matches!(self, ErrorCode::ModelOutputSuspicious)
    }
}

/// Structured parse failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{}: {} at {}:{}", code, message, file, line)]
pub struct ExtractError {
    /// Failure category.
    pub code: ErrorCode,
    /// Human-readable description.
    pub message: String,
    /// Raw diagnostic payload, if any.
    pub details: Option<Value>,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ExtractError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        warn!(%code, error_message = %message, "Model output rejected");
        Self {
            code,
            message,
            details: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// `MODEL_OUTPUT_NOT_JSON` shorthand.
    #[track_caller]
    pub fn not_json(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelOutputNotJson, message)
    }

    /// `MODEL_OUTPUT_SCHEMA_INVALID` shorthand.
    #[track_caller]
    pub fn schema_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelOutputSchemaInvalid, message)
    }

    /// `MODEL_OUTPUT_SUSPICIOUS` shorthand.
    #[track_caller]
    pub fn suspicious(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelOutputSuspicious, message)
    }

    /// Attaches a diagnostic payload.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Serialized form of a failure: `{code, message, details?}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    /// Failure category.
    pub code: ErrorCode,
    /// Human-readable description.
    pub message: String,
    /// Raw diagnostic payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<&ExtractError> for ErrorBody {
    fn from(err: &ExtractError) -> Self {
        Self {
            code: err.code,
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}
