use crate::dtos::ReviewResult;
use serde_json::Value;

/// Paragraphs longer than this many characters get flagged.
pub const MAX_PARAGRAPH_CHARS: usize = 100;

pub const REVIEW_TOO_LONG: &str = "sentence too long, consider splitting";
pub const REVIEW_OK: &str = "no obvious issues";

/// Classifies each paragraph by length. `id` is the zero-based input
/// position and output order matches input order. A non-array value yields
/// no results rather than an error.
///
/// Pure and deterministic; the whole review engine lives here.
pub fn classify(paragraphs: &Value) -> Vec<ReviewResult> {
    let Some(items) = paragraphs.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(id, item)| ReviewResult {
            id,
            review: review_for(&paragraph_text(item)).to_string(),
        })
        .collect()
}

fn review_for(text: &str) -> &'static str {
    // Characters, not bytes: multibyte text must not be over-counted.
    if text.chars().count() > MAX_PARAGRAPH_CHARS {
        REVIEW_TOO_LONG
    } else {
        REVIEW_OK
    }
}

/// Coerces a JSON element to review text: strings pass through, null becomes
/// empty, anything else is reviewed in its display form.
fn paragraph_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
