//! Application wiring.

use crate::startup::{print_startup_info, shutdown_signal};
use shop_config::AppConfig;
use shop_core::ShopResult;
use shop_grpc::GrpcServer;
use shop_repository::{create_pool, DatabasePool, MySqlUserRepository, UserRepository};
use shop_security::{CredentialCodec, Pbkdf2Sha512Codec};
use shop_service::{UserService, UserServiceImpl};
use std::sync::Arc;
use tracing::info;

/// Builds the user service on top of a MySQL-backed repository.
pub fn build_user_service(pool: Arc<DatabasePool>) -> Arc<dyn UserService> {
    let user_repository: Arc<dyn UserRepository> = Arc::new(MySqlUserRepository::new(pool));
    let credential_codec: Arc<dyn CredentialCodec> = Arc::new(Pbkdf2Sha512Codec::new());

    Arc::new(UserServiceImpl::new(user_repository, credential_codec))
}

/// Connects to the database, applies migrations and serves gRPC until a
/// shutdown signal arrives.
pub async fn run(config: AppConfig) -> ShopResult<()> {
    let pool = create_pool(&config.database).await?;

    if config.database.run_migrations {
        pool.run_migrations().await?;
    }

    let server = GrpcServer::new(&config.server, build_user_service(pool.clone()))?;
    print_startup_info(&config, server.addr());

    let result = server.serve_with_shutdown(shutdown_signal()).await;

    pool.close().await;
    info!("Server shutdown complete");

    result
}
