use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs wall-clock handling time for every request. Runs on the success and
/// failure paths alike since short-circuited and error responses flow back
/// through here too.
pub async fn latency_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let response = next.run(req).await;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    tracing::info!(status, elapsed_ms, "done in {}ms", elapsed_ms);

    response
}
