//! HTTP API for the relay.

mod handlers;
mod middleware;

pub use handlers::*;
pub use middleware::logging_middleware;

use crate::relay::OtpRelay;
use axum::{middleware as axum_middleware, routing::post, Router};
use std::sync::Arc;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Relay to the OTP provider
    pub relay: Arc<OtpRelay>,
}

impl AppState {
    /// Create new application state.
    pub fn new(relay: OtpRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

/// Create the API router.
///
/// At most `max_concurrent_requests` requests are handled at once; the
/// rest wait for a slot.
pub fn create_router(state: AppState, max_concurrent_requests: usize) -> Router {
    Router::new()
        .route("/send-otp", post(handlers::send_otp))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(GlobalConcurrencyLimitLayer::new(max_concurrent_requests.max(1)))
        .with_state(state)
}
