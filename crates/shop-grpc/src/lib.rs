//! # Shop gRPC
//!
//! gRPC service layer using Tonic for the shop user service.
//! Exposes the `user.User` service and the standard `grpc.health.v1` health
//! service.

pub mod proto;
pub mod server;
pub mod services;

pub use server::*;
pub use services::*;
