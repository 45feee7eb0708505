//! Tests for board summaries.

use serde_json::{Value, json};
use wordvinder_core::{BoardSummary, LengthCount, parse_model_output, summarize};

fn wordscapes(missing: Value) -> String {
    json!({
        "schema": "WORDVINDER_BOARD_EXTRACT_V4",
        "game": "WORDSCAPES",
        "letters": ["P", "L", "A", "N", "E", "T"],
        "missingByLength": missing,
    })
    .to_string()
}

fn scrabble(rack: Value) -> String {
    json!({
        "schema": "WORDVINDER_SCRABBLE_EXTRACT_V1",
        "game": "SCRABBLE",
        "rack": rack,
        "board": {"size": 15, "tiles": vec![vec![Value::Null; 15]; 15]},
    })
    .to_string()
}

#[test]
fn test_wordscapes_summary() {
    let board = parse_model_output(&wordscapes(json!([
        {"length": 4, "count": 1},
        {"length": 3, "count": 4},
    ])))
    .unwrap();
    assert_eq!(
        summarize(&board),
        BoardSummary::Wordscapes {
            letters: "P L A N E T".to_string(),
            remaining_by_length: vec![LengthCount::new(3, Some(4)), LengthCount::new(4, Some(1))],
            total_remaining: Some(5),
        }
    );
}

#[test]
fn test_unknown_count_makes_total_unknown() {
    let board = parse_model_output(&wordscapes(json!([
        {"length": 4, "count": 1},
        {"length": 5, "count": null},
    ])))
    .unwrap();
    let BoardSummary::Wordscapes { total_remaining, .. } = summarize(&board) else {
        panic!("expected a Wordscapes summary");
    };
    assert_eq!(total_remaining, None);
}

#[test]
fn test_empty_missing_totals_zero() {
    let board = parse_model_output(&wordscapes(json!([]))).unwrap();
    let BoardSummary::Wordscapes { total_remaining, .. } = summarize(&board) else {
        panic!("expected a Wordscapes summary");
    };
    assert_eq!(total_remaining, Some(0));
}

#[test]
fn test_scrabble_summary() {
    let board = parse_model_output(&scrabble(json!([
        {"letter": "Q", "isBlank": false},
        {"letter": "X", "isBlank": true},
        {"letter": "i", "isBlank": false},
        {"isBlank": true},
    ])))
    .unwrap();
    assert_eq!(
        summarize(&board),
        BoardSummary::Scrabble {
            rack: "Q_I_".to_string(),
            rack_count: 4,
            blank_count: 2,
        }
    );
}

#[test]
fn test_summary_serialization() {
    let board = parse_model_output(&wordscapes(json!([{"length": 4, "count": null}]))).unwrap();
    let out = serde_json::to_value(summarize(&board)).unwrap();
    assert_eq!(
        out,
        json!({
            "game": "WORDSCAPES",
            "letters": "P L A N E T",
            "remainingByLength": [{"length": 4, "count": null}],
            "totalRemaining": null,
        })
    );

    let board = parse_model_output(&scrabble(json!([{"isBlank": true}]))).unwrap();
    let out = serde_json::to_value(summarize(&board)).unwrap();
    assert_eq!(
        out,
        json!({"game": "SCRABBLE", "rack": "_", "rackCount": 1, "blankCount": 1})
    );
}
