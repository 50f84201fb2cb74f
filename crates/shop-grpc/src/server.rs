//! gRPC server setup.

use crate::proto::{health, user};
use crate::services::{HealthServiceImpl, UserGrpcService};
use shop_config::ServerConfig;
use shop_core::{ShopError, ShopResult};
use shop_service::UserService;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tonic::transport::Server;
use tower_http::trace::TraceLayer;
use tracing::info;

/// gRPC server exposing the user service and the standard health service.
pub struct GrpcServer {
    addr: SocketAddr,
    request_timeout: Duration,
    user_service: Arc<dyn UserService>,
}

impl GrpcServer {
    /// Creates a new gRPC server.
    pub fn new(config: &ServerConfig, user_service: Arc<dyn UserService>) -> ShopResult<Self> {
        let addr = config
            .grpc_addr()
            .parse()
            .map_err(|e| ShopError::Configuration(format!("Invalid gRPC address: {e}")))?;

        Ok(Self {
            addr,
            request_timeout: config.request_timeout(),
            user_service,
        })
    }

    /// Returns the address the server binds to.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serves until `signal` resolves, then drains in-flight requests.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> ShopResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        info!("Starting gRPC server on {}", self.addr);

        let health_service = HealthServiceImpl::new();
        let user_grpc_service = UserGrpcService::new(self.user_service);

        Server::builder()
            .timeout(self.request_timeout)
            .layer(TraceLayer::new_for_grpc())
            .add_service(health::health_server::HealthServer::new(health_service))
            .add_service(user::user_server::UserServer::new(user_grpc_service))
            .serve_with_shutdown(self.addr, signal)
            .await
            .map_err(|e| ShopError::Internal(format!("gRPC server error: {e}")))?;

        info!("gRPC server stopped");
        Ok(())
    }
}
