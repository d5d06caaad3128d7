//! Request middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, warn};

/// Logs every request with its outcome and latency.
///
/// Upstream failures surface here as 500s, so a warn line per failed
/// relay is guaranteed even when the handler logged nothing.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_client_error() || status.is_server_error() {
        warn!(%method, path = %path, status = status.as_u16(), elapsed_ms, "Request failed");
    } else {
        debug!(%method, path = %path, status = status.as_u16(), elapsed_ms, "Request completed");
    }

    response
}
