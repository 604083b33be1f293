//! 商品仓储接口

use async_trait::async_trait;
use errors::AppResult;

use crate::domain::entities::{NewProduct, Product};

/// 商品仓储接口
///
/// 所有操作相对彼此线性化：每次调用在其执行期间的某一点原子生效。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 插入商品，返回存储分配的 id
    ///
    /// id 从 1 开始单调递增，永不复用。id 冲突返回 `AppError::AlreadyExists`
    /// （计数器逻辑正确时不可达，保留用于约束存档）。
    async fn add(&self, product: NewProduct) -> AppResult<i64>;

    /// 按 id 点查，不存在返回 `AppError::NotFound`
    async fn get(&self, id: i64) -> AppResult<Product>;

    /// 原子替换价格，其余字段不变；不存在返回 `AppError::NotFound`
    async fn update_price(&self, id: i64, price: f64) -> AppResult<()>;

    /// 返回全部商品的一致性快照
    ///
    /// 快照内部顺序确定，但不承诺任何跨快照的顺序。
    async fn list(&self) -> AppResult<Vec<Product>>;
}
