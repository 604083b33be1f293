//! bootstrap - 统一服务启动骨架

mod health;
mod metrics;
mod runtime;
mod starter;

pub use health::{ComponentHealth, HealthServer, HealthStatus};
pub use metrics::{MetricsRecorder, record_grpc_request};
pub use runtime::{init_runtime, shutdown_signal};
pub use starter::run_server;
