//! JSON report printed for a parse run.

use serde::Serialize;
use tracing::{info, instrument, warn};
use wordvinder_core::{Board, BoardSummary, Envelope, ExtractError, summarize};

/// How a parse run ended, for exit-status purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Board parsed.
    Parsed,
    /// Parsed but content was flagged; not a hard failure.
    Flagged,
    /// Rejected.
    Rejected,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Parsed | Outcome::Flagged => 0,
            Outcome::Rejected => 2,
        }
    }
}

/// Success prints `{board, summary}`; failure prints the `{ok: false, error}` envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// A parsed board and its summary.
    Parsed {
        /// The board.
        board: Board,
        /// Its summary, unless disabled.
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<BoardSummary>,
    },
    /// A structured failure.
    Failed(Envelope),
}

impl Report {
    /// Builds a report from a parse result.
    #[instrument(skip(result))]
    pub fn new(result: Result<Board, ExtractError>, include_summary: bool) -> (Self, Outcome) {
        match result {
            Ok(board) => {
                info!(game = %board.game(), "Board parsed");
                let summary = include_summary.then(|| summarize(&board));
                (Report::Parsed { board, summary }, Outcome::Parsed)
            }
            Err(err) => {
                let outcome = if err.code.is_flag_only() {
                    warn!(code = %err.code, "Model output flagged");
                    Outcome::Flagged
                } else {
                    warn!(code = %err.code, "Model output rejected");
                    Outcome::Rejected
                };
                (Report::Failed(Envelope::from(Err(err))), outcome)
            }
        }
    }

    /// Renders the report as JSON.
    pub fn render(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wordvinder_core::parse_model_output;

    const WORDSCAPES: &str = r#"{"schema": "WORDVINDER_BOARD_EXTRACT_V4", "game": "WORDSCAPES",
        "letters": ["S", "T", "O", "N", "E"], "missingByLength": [{"length": 5, "count": 1}]}"#;

    #[test]
    fn test_parsed_report_has_board_and_summary() {
        let (report, outcome) = Report::new(parse_model_output(WORDSCAPES), true);
        assert_eq!(outcome, Outcome::Parsed);
        let out: serde_json::Value = serde_json::from_str(&report.render(false).unwrap()).unwrap();
        assert_eq!(out["board"]["game"], json!("WORDSCAPES"));
        assert_eq!(out["summary"]["letters"], json!("S T O N E"));
        assert_eq!(out["summary"]["totalRemaining"], json!(1));
    }

    #[test]
    fn test_summary_can_be_disabled() {
        let (report, _) = Report::new(parse_model_output(WORDSCAPES), false);
        let out = serde_json::to_value(&report).unwrap();
        assert!(out.get("summary").is_none());
    }

    #[test]
    fn test_rejection_exit_code() {
        let (report, outcome) = Report::new(parse_model_output("{}"), true);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(outcome.exit_code(), 2);
        let out = serde_json::to_value(&report).unwrap();
        assert_eq!(out["ok"], json!(false));
        assert_eq!(out["error"]["code"], json!("MODEL_OUTPUT_SCHEMA_INVALID"));
    }

    #[test]
    fn test_flagged_is_not_a_failure() {
        let err = wordvinder_core::ExtractError::suspicious("solved word FREEBIE");
        let (_, outcome) = Report::new(Err(err), true);
        assert_eq!(outcome, Outcome::Flagged);
        assert_eq!(outcome.exit_code(), 0);
    }
}
