//! HTTP request handlers.

use super::AppState;
use crate::error::RelayError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use mspace_client::OtpRequest;
use tracing::{info, warn};

/// Relay an OTP send request to mSpace.
///
/// The provider's status and body are returned as-is on success. Fields are
/// not validated; whatever `phone` and `message` hold is forwarded.
pub async fn send_otp(
    State(state): State<AppState>,
    payload: Result<Json<OtpRequest>, JsonRejection>,
) -> Result<Response, RelayError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected unparseable request body");
        RelayError::InvalidBody(rejection.body_text())
    })?;

    info!(
        has_phone = request.phone.is_some(),
        has_message = request.message.is_some(),
        "OTP send request received"
    );

    let upstream = state.relay.handle(request).await?;
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::OK);

    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response())
}
