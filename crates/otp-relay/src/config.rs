//! Configuration for the relay.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Relay configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// mSpace API configuration
    pub mspace: MspaceConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct MspaceConfig {
    /// Bearer credential sent to mSpace
    pub api_key: SecretString,

    /// mSpace API base URL
    #[serde(default = "default_mspace_url")]
    pub base_url: String,

    /// Outbound request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on requests handled at once
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl ServerConfig {
    /// Address to bind. A malformed `listen_addr` is an error rather than a
    /// silent fallback to every interface.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address: {:?}", self.listen_addr))?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
            max_concurrent_requests: default_max_concurrent_requests(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// Default value functions
fn default_mspace_url() -> String {
    mspace_client::DEFAULT_BASE_URL.into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_max_concurrent_requests() -> usize {
    1024
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars().collect())
    }

    /// Build configuration from an explicit set of variables.
    ///
    /// Nested keys use `__` (`MSPACE__TIMEOUT`, `SERVER__PORT`). The plain
    /// `MSPACE_API_KEY` and `PORT` names are honored too and take precedence.
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self> {
        let api_key = vars.get("MSPACE_API_KEY").cloned();
        let port = vars.get("PORT").cloned();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Phone-number-like strings must stay strings.
                    .try_parsing(false)
                    .source(Some(vars)),
            )
            .set_override_option("mspace.api_key", api_key)
            .context("Failed to apply MSPACE_API_KEY")?
            .set_override_option("server.port", port)
            .context("Failed to apply PORT")?
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
