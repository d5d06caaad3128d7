//! OTP Relay - Entry point.

use anyhow::{Context, Result};
use mspace_client::MspaceClient;
use otp_relay::{
    api::{create_router, AppState},
    config::{Config, LogConfig, LogFormat},
    OtpRelay,
};
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log);

    if let Err(e) = run(config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    info!("Starting OTP relay");

    let addr = config.server.socket_addr()?;

    let client = MspaceClient::new(
        config.mspace.api_key.expose_secret().as_str(),
        &config.mspace.base_url,
        config.mspace.timeout,
    )
    .context("Failed to create mSpace client")?;

    info!(
        base_url = %client.base_url(),
        timeout = ?config.mspace.timeout,
        "mSpace client ready"
    );

    let state = AppState::new(OtpRelay::new(client));
    let app = create_router(state, config.server.max_concurrent_requests);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(
        max_concurrent_requests = config.server.max_concurrent_requests,
        "Listening on {}", addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down");
    Ok(())
}

fn init_logging(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
