use axum::{Json, response::IntoResponse};
use serde_json::json;

pub async fn index() -> &'static str {
    "Backend deployed, hello from the consistency checker!"
}

pub async fn ping() -> &'static str {
    "pong"
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn version() -> impl IntoResponse {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}
