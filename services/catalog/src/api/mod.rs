//! API layer - gRPC service implementation

pub mod conversions;
pub mod grpc_service;
pub mod validation;

pub use grpc_service::ProductStorageImpl;
