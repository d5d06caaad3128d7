//! OTP Relay - keeps the mSpace API key on the server.
//!
//! Clients post a phone number and message to `/send-otp`; the relay
//! forwards them to mSpace with the bearer credential attached and
//! passes the provider's answer straight back.

pub mod api;
pub mod config;
pub mod error;
pub mod relay;

pub use config::Config;
pub use error::RelayError;
pub use relay::OtpRelay;
