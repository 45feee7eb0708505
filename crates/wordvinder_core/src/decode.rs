//! JSON decoding of sanitized model text.

use crate::error::ExtractError;
use serde_json::{Map, Value, json};
use tracing::{debug, instrument};

/// Decoded top-level object.
pub type JsonObject = Map<String, Value>;

/// Parses sanitized text into a plain JSON object.
///
/// Parser failures become `MODEL_OUTPUT_NOT_JSON` with the parser message in
/// `details`; a value that is not an object is `MODEL_OUTPUT_SCHEMA_INVALID`.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn decode_object(text: &str) -> Result<JsonObject, ExtractError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        ExtractError::not_json("model output is not valid JSON").with_details(json!({
            "parserMessage": e.to_string(),
            "line": e.line(),
            "column": e.column(),
        }))
    })?;

    match value {
        Value::Object(map) => {
            debug!(keys = map.len(), "Decoded model output object");
            Ok(map)
        }
        other => Err(ExtractError::schema_invalid(format!(
            "model output must be a JSON object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Short name of a JSON value's type, for messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_decodes_object() {
        let obj = decode_object(r#"{"schema": "X", "game": "Y"}"#).unwrap();
        assert_eq!(obj.get("game"), Some(&json!("Y")));
    }

    #[test]
    fn test_parse_failure_carries_parser_message() {
        let err = decode_object("{\"letters\": [}").unwrap_err();
        assert_eq!(err.code, ErrorCode::ModelOutputNotJson);
        let details = err.details.expect("details");
        assert!(details["parserMessage"].as_str().is_some());
    }

    #[test]
    fn test_non_object_is_schema_invalid() {
        let err = decode_object("[1, 2, 3]").unwrap_err();
        assert_eq!(err.code, ErrorCode::ModelOutputSchemaInvalid);
        assert!(err.message.contains("array"));

        let err = decode_object("null").unwrap_err();
        assert_eq!(err.code, ErrorCode::ModelOutputSchemaInvalid);
    }
}
