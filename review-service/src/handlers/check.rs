use crate::dtos::{CheckRequest, CheckResponse};
use crate::middleware::RequestContext;
use crate::review;
use axum::{Json, body::Bytes, response::IntoResponse};

const USAGE: &str = "\
Call this endpoint with POST, for example:

curl -X POST http://localhost:5000/check \\
  -H \"Content-Type: application/json\" \\
  -d '{\"paragraphs\":[\"hello\",\"one very long sentence ...\"]}'
";

/// Plain-text instructions for humans opening the endpoint in a browser.
pub async fn check_usage() -> &'static str {
    USAGE
}

pub async fn run_check(ctx: RequestContext, body: Bytes) -> impl IntoResponse {
    // Degrade silently: a body that is not valid JSON, or one without a
    // paragraph array, still produces an (empty) result, never a 4xx.
    let request: CheckRequest = serde_json::from_slice(&body).unwrap_or_default();

    tracing::info!(
        request_id = %ctx.request_id,
        raw_len = ctx.raw_len,
        paragraphs = request.paragraphs.as_array().map_or(0, |p| p.len()),
        "check request received"
    );

    let result = review::classify(&request.paragraphs);

    Json(CheckResponse { result })
}
