// Cross-cutting HTTP layers: tracing, CORS, body limit, timeout errors

use axum::{extract::DefaultBodyLimit, http::StatusCode, BoxError, Json};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::error;

use crate::api::responses::ErrorResponse;
use crate::core::errors::INTERNAL_ERROR_MESSAGE;

/// Per-request tracing spans (method, path, status, latency)
pub fn tracing_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Any origin may call the API
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Caps what body extractors will buffer
///
/// Oversized bodies surface as an `ApiJson` rejection, so the 413 carries the
/// usual JSON error body whether or not `Content-Length` was sent.
pub fn body_size_limit_layer(limit_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(limit_bytes)
}

/// Convert errors raised by tower layers (timeouts) into HTTP responses
pub async fn handle_middleware_error(e: BoxError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = if e.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
    } else {
        error!(error = %e, "Unhandled middleware error");
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
    };

    (status, Json(ErrorResponse { error: message, errors: None }))
}
