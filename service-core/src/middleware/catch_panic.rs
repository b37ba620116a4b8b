use axum::body::Bytes;
use axum::http::{Response, StatusCode, header};
use http_body_util::Full;
use serde_json::json;
use std::any::Any;

/// Translates a handler panic into the generic 500 body. The panic payload
/// stays in the server log and never reaches the client.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Unhandled error");

    let body = json!({ "error": "Internal server error" }).to_string();

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::from(body))
        .expect("static response must build")
}
