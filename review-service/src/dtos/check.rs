use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lenient body for `POST /check`. The paragraphs field is kept as a raw
/// JSON value so that a missing field or a non-array degrades to an empty
/// result instead of a rejection; callers rely on that behavior.
#[derive(Debug, Default, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub paragraphs: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewResult {
    /// Zero-based position of the paragraph in the request.
    pub id: usize,
    pub review: String,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub result: Vec<ReviewResult>,
}
