//! Business logic handler

use std::sync::Arc;

use chrono::{NaiveTime, Utc};
use errors::AppResult;
use tracing::info;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;

use super::commands::{CreateProductCommand, UpdatePriceCommand};
use super::queries::{ListProductsQuery, page_products};

/// 目录服务编排层
///
/// 自身无状态，只持有仓储引用；业务范围校验在 api 层完成，
/// 这里接受任何类型正确的输入（包括极端数值）。
pub struct ServiceHandler {
    product_repo: Arc<dyn ProductRepository>,
}

impl ServiceHandler {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// 创建商品
    ///
    /// 创建时间取当天零点（UTC），不带时分秒。
    pub async fn create_product(&self, cmd: CreateProductCommand) -> AppResult<i64> {
        let create_date = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();

        let product = NewProduct {
            name: cmd.name,
            price: cmd.price,
            weight: cmd.weight,
            category: cmd.category,
            create_date,
            warehouse_id: cmd.warehouse_id,
        };

        let id = self.product_repo.add(product).await?;
        info!(product_id = id, "Product created");

        Ok(id)
    }

    /// 按 id 查询商品
    pub async fn get_product_by_id(&self, product_id: i64) -> AppResult<Product> {
        self.product_repo.get(product_id).await
    }

    /// 更新商品价格
    pub async fn update_price_product(&self, cmd: UpdatePriceCommand) -> AppResult<()> {
        self.product_repo
            .update_price(cmd.product_id, cmd.price)
            .await?;
        info!(product_id = cmd.product_id, price = cmd.price, "Price updated");

        Ok(())
    }

    /// 分页 / 过滤查询商品列表
    pub async fn get_list_products(&self, query: ListProductsQuery) -> AppResult<Vec<Product>> {
        let snapshot = self.product_repo.list().await?;

        Ok(page_products(snapshot, &query))
    }
}
