//! Generated protobuf types.

pub mod common {
    tonic::include_proto!("common");
}

pub mod user {
    tonic::include_proto!("user");
}

pub mod health {
    tonic::include_proto!("grpc.health.v1");
}
