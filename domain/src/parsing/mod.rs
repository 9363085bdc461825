//! Parsing of untrusted model output.
//!
//! The model is asked for raw JSON but often wraps it in markdown fences or
//! ignores the instruction entirely. These functions are pure: they return
//! `None` when the text is unusable and leave the choice of default (and
//! the logging) to the calling component.

use crate::answer::{ComparativeAnalysis, ComparativeResult};
use crate::scripture::verse::VerseId;
use serde_json::Value;

/// Remove markdown code-fence markers (` ```json ` and ` ``` `) and trim.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse a verse identifier list of the form `{ "verses": ["<id>", ...] }`.
///
/// - Fences are stripped first.
/// - An object without a `verses` array yields an empty list.
/// - Non-string and blank entries are skipped.
/// - Returns `None` if the text is not a JSON object.
///
/// No length bound is applied here; see the resolver.
pub fn parse_verse_ids(response: &str) -> Option<Vec<VerseId>> {
    let text = strip_code_fences(response);
    let value: Value = serde_json::from_str(&text).ok()?;
    let obj = value.as_object()?;

    let ids = obj
        .get("verses")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(VerseId::from)
                .collect()
        })
        .unwrap_or_default();

    Some(ids)
}

/// Parse the comparative reply into a [`ComparativeResult`].
///
/// An object carrying a string `error` is the error shape, whatever else it
/// contains; other keys are discarded so the result never mixes shapes.
/// Returns `None` when the text is not JSON or matches neither shape.
pub fn parse_comparison(response: &str) -> Option<ComparativeResult> {
    let text = strip_code_fences(response);
    let value: Value = serde_json::from_str(&text).ok()?;

    if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
        return Some(ComparativeResult::error(error));
    }

    serde_json::from_value::<ComparativeAnalysis>(value)
        .ok()
        .map(ComparativeResult::Analysis)
}
