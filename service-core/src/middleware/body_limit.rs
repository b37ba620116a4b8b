use crate::error::AppError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Maximum declared request body size in bytes, fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct BodyLimit(pub u64);

/// Rejects requests whose declared content length exceeds the configured
/// maximum before the handler ever runs. A missing or unparseable
/// content-length counts as zero; the hosting server enforces what actually
/// arrives on the wire.
pub async fn body_limit_middleware(
    State(BodyLimit(max_bytes)): State<BodyLimit>,
    req: Request,
    next: Next,
) -> Response {
    let raw_len = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);

    if raw_len > max_bytes {
        tracing::warn!(raw_len, max_bytes, "Payload too large");
        return AppError::PayloadTooLarge.into_response();
    }

    next.run(req).await
}
