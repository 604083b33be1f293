//! 商品命令

use crate::domain::enums::Category;

/// 创建商品命令
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub price: f64,
    pub weight: f64,
    pub category: Category,
    pub warehouse_id: i64,
}

/// 更新价格命令
#[derive(Debug, Clone)]
pub struct UpdatePriceCommand {
    pub product_id: i64,
    pub price: f64,
}
