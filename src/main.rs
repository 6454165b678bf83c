//! EventHub Server: event ticketing backend.
//!
//! Loads configuration, initializes logging, and starts the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let (config, source) = match load_configuration() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(
        config = %source,
        "Starting EventHub v{}",
        env!("CARGO_PKG_VERSION")
    );

    if config.auth.uses_default_secret() {
        tracing::warn!("auth.jwt_secret is the shipped placeholder; set EVENTHUB__AUTH__JWT_SECRET");
    }

    if let Err(e) = eventhub_api::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
///
/// `EVENTHUB_CONFIG` names the base file (default `config/default`) and
/// `EVENTHUB_ENV` selects the `config/{env}` overlay (default `development`).
fn load_configuration() -> Result<(AppConfig, String), AppError> {
    let base = std::env::var("EVENTHUB_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let env = std::env::var("EVENTHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = AppConfig::load_from(&base, &env)?;
    Ok((config, format!("{base} (env: {env})")))
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
