//! mSpace OTP HTTP client.

use crate::error::MspaceError;
use crate::types::{OtpRequest, UpstreamResponse};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Production mSpace API host.
pub const DEFAULT_BASE_URL: &str = "https://api.mspace.lk";

/// mSpace OTP client.
///
/// The API key is stored using `SecretString` so it never shows up in
/// logs or debug output.
#[derive(Clone)]
pub struct MspaceClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl MspaceClient {
    /// Create a new mSpace client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MspaceError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: SecretString::new(api_key.into()),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send an OTP message through mSpace.
    ///
    /// Returns the provider's body untouched on a 2xx status. Any other
    /// status, a transport failure, or a non-JSON body is an error.
    #[instrument(skip(self, request))]
    pub async fn send_otp(&self, request: &OtpRequest) -> Result<UpstreamResponse, MspaceError> {
        let url = format!("{}/otp/send", self.base_url);
        debug!(url = %url, "Sending OTP request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "mSpace rejected OTP request");
            return Err(MspaceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;

        // Checked, not re-encoded: the caller gets these exact bytes.
        if !body.is_empty() {
            serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;
        }

        debug!(status = %status, len = body.len(), "OTP request accepted");

        Ok(UpstreamResponse {
            status: status.as_u16(),
            body,
        })
    }
}

impl std::fmt::Debug for MspaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MspaceClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
