//! The relay handler: one inbound request, one call to mSpace.

use crate::error::RelayError;
use mspace_client::{MspaceClient, OtpRequest, UpstreamResponse};
use tracing::{error, instrument};

/// Forwards OTP requests to mSpace.
///
/// Holds the only copy of the credential (inside the client). Stateless
/// otherwise, so one instance is shared by every request.
#[derive(Debug, Clone)]
pub struct OtpRelay {
    client: MspaceClient,
}

impl OtpRelay {
    pub fn new(client: MspaceClient) -> Self {
        Self { client }
    }

    /// Send one OTP through the provider.
    ///
    /// No retries. Every failure collapses into [`RelayError::Upstream`];
    /// the provider's error body (or the transport error) goes to the log.
    #[instrument(skip_all)]
    pub async fn handle(&self, request: OtpRequest) -> Result<UpstreamResponse, RelayError> {
        self.client.send_otp(&request).await.map_err(|e| {
            match e.upstream_body() {
                Some(body) => error!(error = %e, upstream_body = %body, "OTP sending failed"),
                None => error!(error = %e, "OTP sending failed"),
            }
            RelayError::Upstream(e)
        })
    }
}
