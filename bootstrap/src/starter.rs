//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use config::AppConfig;
use tonic::transport::{Server, server::Router};
use tracing::{error, info};

use crate::health::HealthServer;
use crate::metrics::MetricsRecorder;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 gRPC 服务
///
/// 这是服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus recorder 并启动健康检查 HTTP 服务器
/// 4. 调用调用方提供的闭包构建 gRPC 服务
/// 5. 启动服务器并处理 graceful shutdown
///
/// 健康检查端口为 gRPC 端口 + 1000。
pub async fn run_server<F, Fut>(
    config_dir: &str,
    service_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(AppConfig, Server) -> Fut,
    Fut: Future<Output = Result<Router, Box<dyn std::error::Error>>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = Arc::new(MetricsRecorder::new());

    // 4. 启动健康检查 HTTP 服务器
    let health_port = config.server.port + 1000;
    let health_server = HealthServer::new(config.app_name.clone(), metrics, health_port);
    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve().await {
            error!("Health server error: {}", e);
        }
    });

    // 5. 构建服务地址
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // 6. 构建 gRPC 服务
    let router = service_builder(config, Server::builder()).await?;

    info!(%addr, "gRPC server starting");

    // 7. 启动服务器
    router.serve_with_shutdown(addr, shutdown_signal()).await?;

    // 8. 清理
    health_handle.abort();

    info!("Service stopped");

    Ok(())
}
