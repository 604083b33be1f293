//! 商品实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::enums::Category;

/// 商品
///
/// `id` 由存储在插入时分配，之后不可变；除 `price` 外其余字段创建后不再变化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub weight: f64,
    pub category: Category,
    pub create_date: DateTime<Utc>,
    pub warehouse_id: i64,
}

/// 尚未入库的商品，没有 id
///
/// `ProductRepository::add` 的输入：id 只能由存储分配，调用方无法伪造。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub weight: f64,
    pub category: Category,
    pub create_date: DateTime<Utc>,
    pub warehouse_id: i64,
}

impl NewProduct {
    /// 绑定存储分配的 id，生成入库实体
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            weight: self.weight,
            category: self.category,
            create_date: self.create_date,
            warehouse_id: self.warehouse_id,
        }
    }
}
