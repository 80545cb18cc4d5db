//! Risk Profiler - API Server Binary
//!
//! This binary starts the HTTP API server for risk profile calculation.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin risk-profiler-api
//!
//! # Run with environment variables
//! API_PORT=9000 API_REFERENCE_DATE=2024-06-15 cargo run --bin risk-profiler-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_LARGE_INCOME_THRESHOLD` - Income above which every line loses a point (default: 200000)
//! * `API_RECENT_VEHICLE_YEARS` - Vehicle age counted as recent (default: 5)
//! * `API_REFERENCE_DATE` - `today` or `YYYY-MM-DD` (default: today)

use std::net::SocketAddr;

use anyhow::Context;
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be read from the environment
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        large_income_threshold = config.large_income_threshold,
        recent_vehicle_years = config.recent_vehicle_years,
        reference_date = %config.reference_date,
        "Starting Risk Profiler API Server"
    );

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    let app = create_router(config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
