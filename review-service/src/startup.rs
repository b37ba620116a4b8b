use crate::config::ReviewConfig;
use crate::extract::{Extractor, TextExtractor};
use crate::handlers;
use axum::http::{HeaderValue, Method, header};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::Router;
use service_core::error::AppError;
use service_core::middleware::body_limit::{BodyLimit, body_limit_middleware};
use service_core::middleware::catch_panic::handle_panic;
use service_core::middleware::latency::latency_middleware;
use service_core::middleware::request_id::{REQUEST_ID_HEADER, request_id_middleware};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ReviewConfig,
    pub extractor: Arc<dyn Extractor>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: ReviewConfig) -> Result<Self, AppError> {
        let extractor: Arc<dyn Extractor> = Arc::new(TextExtractor::new());

        let state = AppState {
            config: config.clone(),
            extractor,
        };

        let app = Router::new()
            .route("/", get(handlers::index))
            .route("/ping", get(handlers::ping))
            .route("/health", get(handlers::health_check))
            .route("/version", get(handlers::version))
            .route(
                "/check",
                get(handlers::check_usage).post(handlers::run_check),
            )
            .route("/upload", post(handlers::upload_document))
            // Layers run outermost-last: a panic anywhere in a handler is
            // translated first, then the size guard and latency log apply,
            // all inside the traced span carrying the request id.
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(from_fn_with_state(
                BodyLimit(config.limits.max_body_bytes),
                body_limit_middleware,
            ))
            .layer(from_fn(latency_middleware))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
            )
            .layer(from_fn(request_id_middleware))
            .layer(cors_layer(&config.security.allowed_origins))
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(
            allowed_origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::error!("Invalid CORS origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect::<Vec<HeaderValue>>(),
        )
    }
}
