//! Wordscapes extract normalization.

use super::types::{LengthCount, SolvedWords, WordList, WordscapesBoard};
use crate::decode::{JsonObject, kind_of};
use crate::error::ExtractError;
use crate::games::{normalize_notes, reject_unknown_keys, require};
use crate::policy::{ContentPolicy, Field, suspicious_token};
use crate::text::{Letter, int_in_range, is_word, normalized_text};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// Top-level keys a Wordscapes extract may carry.
pub const WORDSCAPES_KEYS: &[&str] = &[
    "schema",
    "game",
    "letters",
    "missingByLength",
    "wordLists",
    "solvedWordsByLength",
    "notes",
];

const MIN_LETTERS: usize = 5;
const MAX_LETTERS: usize = 8;
const MIN_WORD_LEN: i64 = 3;
const MAX_WORD_LEN: i64 = 12;
const MAX_COUNT: i64 = 20;

/// Validates a routed Wordscapes object into a canonical board.
///
/// `letters`, `missingByLength` and the key allow-list are strict. `wordLists`
/// and `solvedWordsByLength` drop what they cannot read. `content` decides
/// whether a suspicious solved word is dropped or fails the parse.
#[instrument(skip(obj), fields(keys = obj.len()))]
pub fn normalize_wordscapes(
    obj: &JsonObject,
    content: ContentPolicy,
) -> Result<WordscapesBoard, ExtractError> {
    reject_unknown_keys(obj, WORDSCAPES_KEYS)?;
    let letters_raw = require(obj, Field::Letters)?;
    let missing_raw = require(obj, Field::MissingByLength)?;

    let mut notes = normalize_notes(obj.get(Field::Notes.key()))?;
    let letters = normalize_letters(letters_raw, &mut notes)?;
    let missing_by_length = normalize_missing(missing_raw, &mut notes)?;

    let word_lists = match obj.get(Field::WordLists.key()) {
        Some(value) => normalize_word_lists(value, content, &mut notes)?,
        None => Vec::new(),
    };

    let solved_words_by_length = if word_lists.is_empty() {
        match obj.get(Field::SolvedWordsByLength.key()) {
            Some(value) => normalize_solved(value, content, &mut notes)?,
            None => Vec::new(),
        }
    } else {
        group_words(
            word_lists
                .iter()
                .flat_map(|list| list.solved().map(move |w| (list.length, w.to_string()))),
        )
    };

    debug!(
        letters = letters.len(),
        lengths = missing_by_length.len(),
        word_lists = word_lists.len(),
        "Normalized Wordscapes board"
    );

    Ok(WordscapesBoard {
        letters,
        missing_by_length,
        word_lists,
        solved_words_by_length,
        notes,
    })
}

/// Validates the letter wheel: 5-8 single letters, deduplicated in order.
fn normalize_letters(value: &Value, notes: &mut Vec<String>) -> Result<Vec<Letter>, ExtractError> {
    let field = Field::Letters;
    let Some(items) = value.as_array() else {
        field.malformed(notes, &format!("expected an array, got {}", kind_of(value)))?;
        return Ok(Vec::new());
    };
    if !(MIN_LETTERS..=MAX_LETTERS).contains(&items.len()) {
        field.malformed(
            notes,
            &format!(
                "expected {}-{} entries, got {}",
                MIN_LETTERS,
                MAX_LETTERS,
                items.len()
            ),
        )?;
        return Ok(Vec::new());
    }

    let mut letters: Vec<Letter> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(letter) = Letter::from_value(item) else {
            field.malformed_entry(index, "expected a single letter A-Z")?;
            continue;
        };
        if !letters.contains(&letter) {
            letters.push(letter);
        }
    }

    if letters.len() < MIN_LETTERS {
        field.malformed(
            notes,
            &format!(
                "expected at least {} unique letters, got {}",
                MIN_LETTERS,
                letters.len()
            ),
        )?;
    }
    Ok(letters)
}

/// Validates remaining-word counts and merges entries sharing a length.
///
/// A merged count is unknown if any contributor is unknown, and saturates at
/// the per-length maximum.
fn normalize_missing(
    value: &Value,
    notes: &mut Vec<String>,
) -> Result<Vec<LengthCount>, ExtractError> {
    let field = Field::MissingByLength;
    let Some(items) = value.as_array() else {
        field.malformed(notes, &format!("expected an array, got {}", kind_of(value)))?;
        return Ok(Vec::new());
    };

    let mut merged: BTreeMap<u8, Option<u32>> = BTreeMap::new();
    for (index, item) in items.iter().enumerate() {
        let Some(entry) = item.as_object() else {
            field.malformed_entry(index, "expected an object")?;
            continue;
        };
        let Some(length) = entry
            .get("length")
            .and_then(|v| int_in_range(v, MIN_WORD_LEN, MAX_WORD_LEN))
        else {
            field.malformed_entry(
                index,
                &format!("length must be an integer {}-{}", MIN_WORD_LEN, MAX_WORD_LEN),
            )?;
            continue;
        };
        let count = match entry.get("count") {
            Some(Value::Null) => None,
            Some(v) => match int_in_range(v, 0, MAX_COUNT) {
                Some(c) => Some(c as u32),
                None => {
                    field.malformed_entry(
                        index,
                        &format!("count must be null or an integer 0-{}", MAX_COUNT),
                    )?;
                    continue;
                }
            },
            None => {
                field.malformed_entry(index, "count is missing")?;
                continue;
            }
        };

        merged
            .entry(length as u8)
            .and_modify(|existing| *existing = (*existing).zip(count).map(|(a, b)| merge_counts(a, b)))
            .or_insert(count);
    }

    Ok(merged
        .into_iter()
        .map(|(length, count)| LengthCount::new(length, count))
        .collect())
}

/// Sums two counts for the same length, capped at [`MAX_COUNT`].
fn merge_counts(a: u32, b: u32) -> u32 {
    a.saturating_add(b).min(MAX_COUNT as u32)
}

/// Validates slot lists; bad slots become `None`, bad entries are skipped.
fn normalize_word_lists(
    value: &Value,
    content: ContentPolicy,
    notes: &mut Vec<String>,
) -> Result<Vec<WordList>, ExtractError> {
    let field = Field::WordLists;
    let Some(items) = value.as_array() else {
        field.malformed(notes, &format!("expected an array, got {}", kind_of(value)))?;
        return Ok(Vec::new());
    };

    let mut lists = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some((length, raw_words)) = read_length_entry(field, index, item, "slots")? else {
            continue;
        };
        let slots = raw_words
            .iter()
            .map(|raw| normalize_word(raw, length, content))
            .collect::<Result<Vec<_>, _>>()?;
        lists.push(WordList::new(length, slots));
    }

    // Stable sort keeps input order within a length.
    lists.sort_by_key(|list| list.length);
    Ok(lists)
}

/// Validates a raw `solvedWordsByLength` field; bad entries and words are skipped.
fn normalize_solved(
    value: &Value,
    content: ContentPolicy,
    notes: &mut Vec<String>,
) -> Result<Vec<SolvedWords>, ExtractError> {
    let field = Field::SolvedWordsByLength;
    let Some(items) = value.as_array() else {
        field.malformed(notes, &format!("expected an array, got {}", kind_of(value)))?;
        return Ok(Vec::new());
    };

    let mut words = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some((length, raw_words)) = read_length_entry(field, index, item, "words")? else {
            continue;
        };
        for raw in raw_words {
            if let Some(word) = normalize_word(raw, length, content)? {
                words.push((length, word));
            }
        }
    }
    Ok(group_words(words))
}

/// Reads `{length, <list_key>: [...]}`, applying the field's entry policy.
fn read_length_entry<'a>(
    field: Field,
    index: usize,
    item: &'a Value,
    list_key: &str,
) -> Result<Option<(u8, &'a Vec<Value>)>, ExtractError> {
    let Some(entry) = item.as_object() else {
        field.malformed_entry(index, "expected an object")?;
        return Ok(None);
    };
    let Some(length) = entry
        .get("length")
        .and_then(|v| int_in_range(v, MIN_WORD_LEN, MAX_WORD_LEN))
    else {
        field.malformed_entry(
            index,
            &format!("length must be an integer {}-{}", MIN_WORD_LEN, MAX_WORD_LEN),
        )?;
        return Ok(None);
    };
    let Some(list) = entry.get(list_key).and_then(Value::as_array) else {
        field.malformed_entry(index, &format!("{} must be an array", list_key))?;
        return Ok(None);
    };
    Ok(Some((length as u8, list)))
}

/// Reads one solved word of a known length.
///
/// Anything unreadable is `None`. A readable word containing a suspicious
/// token is `None` under [`ContentPolicy::Drop`] and an error under
/// [`ContentPolicy::Reject`].
fn normalize_word(
    value: &Value,
    length: u8,
    content: ContentPolicy,
) -> Result<Option<String>, ExtractError> {
    let Some(word) = normalized_text(value) else {
        return Ok(None);
    };
    if !is_word(&word) || word.len() != usize::from(length) {
        return Ok(None);
    }
    if let Some(token) = suspicious_token(&word) {
        return match content {
            ContentPolicy::Drop => {
                warn!(%word, token, "Dropping suspicious word");
                Ok(None)
            }
            ContentPolicy::Reject => Err(ExtractError::suspicious(format!(
                "solved word {} contains suspicious token {}",
                word, token
            ))
            .with_details(json!({ "word": word, "token": token }))),
        };
    }
    Ok(Some(word))
}

/// Groups words by length, deduplicating within a length in first-seen order.
fn group_words(words: impl IntoIterator<Item = (u8, String)>) -> Vec<SolvedWords> {
    let mut groups: BTreeMap<u8, Vec<String>> = BTreeMap::new();
    for (length, word) in words {
        let group = groups.entry(length).or_default();
        if !group.contains(&word) {
            group.push(word);
        }
    }
    groups
        .into_iter()
        .map(|(length, words)| SolvedWords::new(length, words))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_normalize_word_checks_length_and_letters() {
        let drop = ContentPolicy::Drop;
        assert_eq!(normalize_word(&json!(" cats "), 4, drop).unwrap(), word("CATS"));
        assert_eq!(normalize_word(&json!("FREEZ"), 4, drop).unwrap(), None);
        assert_eq!(normalize_word(&json!("CA-T"), 4, drop).unwrap(), None);
        assert_eq!(normalize_word(&json!(4), 4, drop).unwrap(), None);
        assert_eq!(normalize_word(&Value::Null, 4, drop).unwrap(), None);
    }

    #[test]
    fn test_normalize_word_content_policy() {
        assert_eq!(
            normalize_word(&json!("FREEBIE"), 7, ContentPolicy::Drop).unwrap(),
            None
        );
        let err = normalize_word(&json!("FREEBIE"), 7, ContentPolicy::Reject).unwrap_err();
        assert_eq!(err.details, Some(json!({"word": "FREEBIE", "token": "FREE"})));
    }

    #[test]
    fn test_group_words_dedups_and_sorts() {
        let groups = group_words(vec![
            (5, "PLANE".to_string()),
            (4, "CATS".to_string()),
            (4, "DOGS".to_string()),
            (4, "CATS".to_string()),
        ]);
        assert_eq!(
            groups,
            vec![
                SolvedWords::new(4, vec!["CATS".into(), "DOGS".into()]),
                SolvedWords::new(5, vec!["PLANE".into()]),
            ]
        );
    }

    #[test]
    fn test_missing_merge_poisons_with_unknown() {
        let mut notes = Vec::new();
        let merged = normalize_missing(
            &json!([
                {"length": 4, "count": 2},
                {"length": 4, "count": null},
                {"length": 3, "count": 1},
                {"length": 3, "count": 2},
            ]),
            &mut notes,
        )
        .unwrap();
        assert_eq!(
            merged,
            vec![LengthCount::new(3, Some(3)), LengthCount::new(4, None)]
        );
    }

    #[test]
    fn test_missing_merge_caps_at_max() {
        let mut notes = Vec::new();
        let merged = normalize_missing(
            &json!([
                {"length": 4, "count": 15},
                {"length": 4, "count": 10},
                {"length": 4, "count": 20},
            ]),
            &mut notes,
        )
        .unwrap();
        assert_eq!(merged, vec![LengthCount::new(4, Some(20))]);
    }

    #[test]
    fn test_missing_count_is_required() {
        let mut notes = Vec::new();
        assert!(normalize_missing(&json!([{"length": 4}]), &mut notes).is_err());
        assert!(normalize_missing(&json!([{"length": 4, "count": 21}]), &mut notes).is_err());
        assert!(normalize_missing(&json!([{"length": 13, "count": 1}]), &mut notes).is_err());
    }

    #[test]
    fn test_letters_with_invalid_entry_reject() {
        let mut notes = Vec::new();
        assert!(normalize_letters(&json!(["A", "B", "C", "D", "EF"]), &mut notes).is_err());
        assert!(normalize_letters(&json!(["A", "B", "C", "D", 5]), &mut notes).is_err());
    }
}
