//! gRPC service implementations.

mod health_service;
mod user_service;

pub use health_service::*;
pub use user_service::*;
