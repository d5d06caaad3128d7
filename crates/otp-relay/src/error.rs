//! Error types for the relay.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mspace_client::MspaceError;
use serde::Serialize;
use thiserror::Error;

/// Body returned for every upstream failure.
pub const OTP_FAILED_MESSAGE: &str = "OTP sending failed";

/// Body returned when the inbound request cannot be parsed.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Relay error types.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Any failure talking to mSpace. The cause is only logged.
    #[error("OTP sending failed: {0}")]
    Upstream(#[from] MspaceError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RelayError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, OTP_FAILED_MESSAGE),
            RelayError::InvalidBody(_) => (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE),
        };

        let body = ErrorResponse {
            error: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: RelayError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_upstream_error_hides_detail() {
        let err = RelayError::Upstream(MspaceError::Api {
            status: 401,
            body: r#"{"error":"invalid key"}"#.into(),
        });

        let (status, json) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "OTP sending failed" }));
    }

    #[tokio::test]
    async fn test_invalid_body() {
        let (status, json) = render(RelayError::InvalidBody("EOF".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid request body");
    }
}
