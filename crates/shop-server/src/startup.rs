//! Server startup utilities.

use shop_config::AppConfig;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

/// Logs where the server listens and how it is configured.
pub fn print_startup_info(config: &AppConfig, grpc_addr: SocketAddr) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("gRPC API:  http://{}", grpc_addr);
    info!("Health:    grpc.health.v1.Health on the same port");
    info!(
        "Database:  pool {}..{} connections, migrations {}",
        config.database.min_connections,
        config.database.max_connections,
        if config.database.run_migrations { "on" } else { "off" }
    );
    info!("Timeout:   {}s per request", config.server.request_timeout_secs);
    info!("{}", separator);
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// A signal source that cannot be installed is logged and never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        let addr: SocketAddr = "127.0.0.1:8088".parse().unwrap();
        print_startup_info(&AppConfig::default(), addr);
    }
}
