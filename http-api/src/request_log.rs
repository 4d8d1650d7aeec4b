//! Request logging middleware for the HTTP API
//!
//! Emits one tracing event per request with method, path, status, and
//! latency.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Log every request as a single structured event
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), latency_ms, "request failed");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), latency_ms, "request handled");
    }

    response
}
