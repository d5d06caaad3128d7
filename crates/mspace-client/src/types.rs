//! mSpace API request and response types.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// OTP send request, forwarded to mSpace as-is.
///
/// Fields are kept as raw JSON so whatever the caller sent reaches the
/// provider unchanged, `null` included. An absent field is omitted from
/// the outbound body. Only a JSON object deserializes; arrays and scalars
/// are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct OtpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

impl From<Map<String, Value>> for OtpRequest {
    fn from(mut object: Map<String, Value>) -> Self {
        Self {
            phone: object.remove("phone"),
            message: object.remove("message"),
        }
    }
}

impl OtpRequest {
    /// Build a request from a phone number and message text.
    pub fn new(phone: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phone: Some(Value::String(phone.into())),
            message: Some(Value::String(message.into())),
        }
    }
}

/// Successful mSpace response.
///
/// The body is the exact bytes the provider sent; it has been checked to be
/// JSON but is never re-encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    /// HTTP status returned by mSpace (always 2xx)
    pub status: u16,
    /// Raw JSON body
    pub body: Bytes,
}
