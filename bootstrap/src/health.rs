//! 健康检查模块
//!
//! 提供 /health/live、/health/ready 和 /metrics 端点

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use tracing::info;

use crate::metrics::MetricsRecorder;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
        }
    }
}

#[derive(Clone)]
struct HealthState {
    service_name: String,
    metrics: Arc<MetricsRecorder>,
}

/// 健康检查 HTTP 服务器
///
/// 服务状态全部在进程内存中，没有外部依赖，所以就绪检查只确认
/// 进程本身在运行。
pub struct HealthServer {
    service_name: String,
    metrics: Arc<MetricsRecorder>,
    port: u16,
}

impl HealthServer {
    pub fn new(service_name: impl Into<String>, metrics: Arc<MetricsRecorder>, port: u16) -> Self {
        Self {
            service_name: service_name.into(),
            metrics,
            port,
        }
    }

    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let state = HealthState {
            service_name: self.service_name,
            metrics: self.metrics,
        };

        let app = Router::new()
            .route("/health/live", get(liveness))
            .route("/health/ready", get(readiness))
            .route("/metrics", get(render_metrics))
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "Health server listening");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

async fn liveness() -> impl IntoResponse {
    Json(HealthStatus::healthy())
}

async fn readiness(State(state): State<HealthState>) -> impl IntoResponse {
    let mut status = HealthStatus::healthy();
    status.add_check(ComponentHealth::healthy(state.service_name.clone()));

    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

async fn render_metrics(State(state): State<HealthState>) -> impl IntoResponse {
    state.metrics.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhealthy_check_flips_status() {
        let mut status = HealthStatus::healthy();
        status.add_check(ComponentHealth::healthy("catalog"));
        assert!(status.is_healthy());

        status.add_check(ComponentHealth {
            name: "store".to_string(),
            status: "unhealthy".to_string(),
            message: Some("gone".to_string()),
        });
        assert!(!status.is_healthy());
    }
}
