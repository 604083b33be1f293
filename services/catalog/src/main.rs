//! catalog Service - 商品目录

use std::sync::Arc;

use bootstrap::run_server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tracing::info;

use catalog::FILE_DESCRIPTOR_SET;
use catalog::api::ProductStorageImpl;
use catalog::application::ServiceHandler;
use catalog::infrastructure::persistence::InMemoryProductRepository;
use catalog::proto::product_storage_server::ProductStorageServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |_config, mut server| async move {
        info!("Initializing catalog service...");

        // 商品存储由启动代码持有，通过引用注入，不使用全局单例
        let product_repo = Arc::new(InMemoryProductRepository::new());
        let handler = Arc::new(ServiceHandler::new(product_repo));
        let service = ProductStorageImpl::new(handler);
        info!("Product store initialized");

        let reflection_service = ReflectionBuilder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;

        Ok(server
            .add_service(ProductStorageServer::new(service))
            .add_service(reflection_service))
    })
    .await
}
