//! mSpace OTP delivery API client.

mod client;
mod error;
mod types;

pub use client::{MspaceClient, DEFAULT_BASE_URL};
pub use error::MspaceError;
pub use types::*;
