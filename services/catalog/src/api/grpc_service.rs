//! gRPC service implementation

use std::sync::Arc;
use std::time::Instant;

use bootstrap::record_grpc_request;
use errors::AppError;
use tonic::{Request, Response, Status};
use tracing::info;

use crate::application::ServiceHandler;
use crate::application::commands::{CreateProductCommand, UpdatePriceCommand};
use crate::proto;
use crate::proto::product_storage_server::ProductStorage;

use super::conversions::{category_from_proto, list_query_from_proto, product_to_proto};
use super::validation::{validate_create_product, validate_get_list, validate_update_price};

const SERVICE_NAME: &str = "catalog.v1.ProductStorage";

/// 错误到 gRPC 状态的映射
///
/// 只有校验失败映射为 InvalidArgument；其余错误（包括 NotFound）
/// 一律以 Internal 暴露。商品不存在不返回 NotFound 状态码是对外
/// 契约的一部分，不要"修复"。
fn to_status(err: AppError) -> Status {
    match &err {
        AppError::Validation(_) => Status::invalid_argument(err.to_string()),
        _ => Status::internal(err.to_string()),
    }
}

// 记录调用结束日志和 metrics
fn observe<T>(
    method: &str,
    started: Instant,
    result: Result<Response<T>, Status>,
) -> Result<Response<T>, Status> {
    let status = match &result {
        Ok(_) => "ok".to_string(),
        Err(s) => format!("{:?}", s.code()),
    };
    record_grpc_request(
        SERVICE_NAME,
        method,
        &status,
        started.elapsed().as_secs_f64() * 1000.0,
    );
    info!(method, status = %status, "End call");

    result
}

pub struct ProductStorageImpl {
    handler: Arc<ServiceHandler>,
}

impl ProductStorageImpl {
    pub fn new(handler: Arc<ServiceHandler>) -> Self {
        Self { handler }
    }
}

#[tonic::async_trait]
impl ProductStorage for ProductStorageImpl {
    async fn create_product(
        &self,
        request: Request<proto::CreateProductRequest>,
    ) -> Result<Response<proto::CreateProductResponse>, Status> {
        let started = Instant::now();
        info!(method = "CreateProduct", "Starting call");
        let req = request.into_inner();

        let result = async {
            validate_create_product(&req).map_err(to_status)?;

            let cmd = CreateProductCommand {
                name: req.name,
                price: req.price,
                weight: req.weight,
                category: category_from_proto(req.category).map_err(to_status)?,
                warehouse_id: req.warehouse_id,
            };

            let id = self.handler.create_product(cmd).await.map_err(to_status)?;

            Ok(Response::new(proto::CreateProductResponse { id }))
        }
        .await;

        observe("CreateProduct", started, result)
    }

    async fn get_product_by_id(
        &self,
        request: Request<proto::GetProductByIdRequest>,
    ) -> Result<Response<proto::GetProductByIdResponse>, Status> {
        let started = Instant::now();
        info!(method = "GetProductById", "Starting call");
        let req = request.into_inner();

        let result = async {
            let product = self
                .handler
                .get_product_by_id(req.id)
                .await
                .map_err(to_status)?;

            Ok(Response::new(proto::GetProductByIdResponse {
                product: Some(product_to_proto(&product)),
            }))
        }
        .await;

        observe("GetProductById", started, result)
    }

    async fn update_price_product(
        &self,
        request: Request<proto::UpdatePriceProductRequest>,
    ) -> Result<Response<proto::UpdatePriceProductResponse>, Status> {
        let started = Instant::now();
        info!(method = "UpdatePriceProduct", "Starting call");
        let req = request.into_inner();

        let result = async {
            validate_update_price(&req).map_err(to_status)?;

            self.handler
                .update_price_product(UpdatePriceCommand {
                    product_id: req.id,
                    price: req.price,
                })
                .await
                .map_err(to_status)?;

            Ok(Response::new(proto::UpdatePriceProductResponse {}))
        }
        .await;

        observe("UpdatePriceProduct", started, result)
    }

    async fn get_list_product(
        &self,
        request: Request<proto::GetListProductRequest>,
    ) -> Result<Response<proto::GetListProductResponse>, Status> {
        let started = Instant::now();
        info!(method = "GetListProduct", "Starting call");
        let req = request.into_inner();

        let result = async {
            validate_get_list(&req).map_err(to_status)?;
            let query = list_query_from_proto(&req).map_err(to_status)?;

            let products = self
                .handler
                .get_list_products(query)
                .await
                .map_err(to_status)?;

            Ok(Response::new(proto::GetListProductResponse {
                products: products.iter().map(product_to_proto).collect(),
            }))
        }
        .await;

        observe("GetListProduct", started, result)
    }
}
