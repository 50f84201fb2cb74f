//! gRPC health service implementation.

use crate::proto::health::{
    health_check_response::ServingStatus, health_server::Health, HealthCheckRequest,
    HealthCheckResponse,
};
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};
use tracing::debug;

/// Fully qualified name of the user service as registered on the server.
pub const USER_SERVICE_NAME: &str = "user.User";

/// Health service implementation.
#[derive(Debug, Default)]
pub struct HealthServiceImpl;

impl HealthServiceImpl {
    /// Creates a new health service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Gets the health status for a service.
    fn get_status(service: &str) -> ServingStatus {
        debug!("Health check for service: {:?}", service);

        match service {
            "" | USER_SERVICE_NAME => ServingStatus::Serving,
            _ => ServingStatus::ServiceUnknown,
        }
    }
}

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    async fn check(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        let status = Self::get_status(&request.into_inner().service);

        Ok(Response::new(HealthCheckResponse {
            status: status.into(),
        }))
    }

    type WatchStream = ReceiverStream<Result<HealthCheckResponse, Status>>;

    async fn watch(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        let status = Self::get_status(&request.into_inner().service);

        let (tx, rx) = tokio::sync::mpsc::channel(1);

        // Capacity 1 so the initial status never blocks.
        let _ = tx
            .send(Ok(HealthCheckResponse {
                status: status.into(),
            }))
            .await;

        Ok(Response::new(ReceiverStream::new(rx)))
    }
}
