//! # Shop User Service
//!
//! Main entry point: configuration, logging, then the gRPC server.

use shop_config::ConfigLoader;
use shop_core::telemetry::{init_tracing, DEFAULT_LOG_FILTER};
use shop_server::app;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location().load() {
        Ok(config) => config,
        Err(e) => {
            let _ = init_tracing(DEFAULT_LOG_FILTER, false);
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&config.observability.log_filter, config.observability.json) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    info!("Starting {}...", config.app.name);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = app::run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
