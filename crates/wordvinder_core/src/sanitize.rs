//! Code-fence stripping and object shape pre-check.

use crate::error::ExtractError;
use tracing::{debug, instrument};

const FENCE: &str = "```";

/// Strips an optional triple-backtick fence (optionally tagged `json`).
///
/// Returns the inner text trimmed, or the trimmed input unchanged when it is
/// not fenced.
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.len() < FENCE.len() * 2
        || !trimmed.starts_with(FENCE)
        || !trimmed.ends_with(FENCE)
    {
        return trimmed;
    }

    let inner = &trimmed[FENCE.len()..trimmed.len() - FENCE.len()];
    let inner = match inner.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &inner[4..],
        _ => inner,
    };
    debug!("Stripped code fence");
    inner.trim()
}

/// Cheap pre-check that the text is shaped like a single JSON object.
pub fn looks_like_object(text: &str) -> bool {
    text.starts_with('{') && text.ends_with('}')
}

/// Runs the sanitizer stage: fence stripping followed by the object shape check.
#[instrument(skip(raw))]
pub fn sanitize_model_text(raw: &str) -> Result<&str, ExtractError> {
    let text = strip_code_fence(raw);
    if text.is_empty() {
        return Err(ExtractError::not_json("model output is empty"));
    }
    if !looks_like_object(text) {
        return Err(ExtractError::not_json(
            "model output does not look like a JSON object",
        ));
    }
    Ok(text)
}
