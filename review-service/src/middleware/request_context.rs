use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use service_core::error::AppError;
use service_core::middleware::request_id::REQUEST_ID_HEADER;

/// Per-request context for handler log lines: the id assigned by the request
/// pipeline and the declared body length in bytes. Created at request start,
/// discarded with the response.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub raw_len: u64,
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The request-id middleware runs first and always sets the header.
        let request_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();

        let raw_len = parts
            .headers
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Ok(RequestContext {
            request_id,
            raw_len,
        })
    }
}
