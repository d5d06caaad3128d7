//! mSpace client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MspaceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl MspaceError {
    /// Upstream error body, when the provider sent one.
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            MspaceError::Api { body, .. } if !body.is_empty() => Some(body.as_str()),
            _ => None,
        }
    }
}
