//! Proto ↔ Domain conversions

use chrono::{DateTime, TimeZone, Utc};
use errors::{AppError, AppResult};

use crate::application::queries::ListProductsQuery;
use crate::domain::entities::Product;
use crate::domain::enums::Category;
use crate::proto;

// 解析 proto 分类值
pub fn category_from_proto(code: i32) -> AppResult<Category> {
    Category::from_code(code)
        .ok_or_else(|| AppError::validation(format!("unknown category value {}", code)))
}

// Timestamp → DateTime<Utc>
pub fn timestamp_to_datetime(ts: &prost_types::Timestamp) -> AppResult<DateTime<Utc>> {
    let nanos = u32::try_from(ts.nanos)
        .map_err(|_| AppError::validation("timestamp nanos out of range"))?;
    Utc.timestamp_opt(ts.seconds, nanos)
        .single()
        .ok_or_else(|| AppError::validation("timestamp out of range"))
}

// DateTime<Utc> → Timestamp
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

pub fn product_to_proto(product: &Product) -> proto::Product {
    proto::Product {
        id: product.id,
        name: product.name.clone(),
        price: product.price,
        weight: product.weight,
        category: product.category.code(),
        create_date: Some(datetime_to_timestamp(product.create_date)),
        warehouse_id: product.warehouse_id,
    }
}

// 列表请求 → 查询对象；缺省 filter 等价于全部哨兵值
pub fn list_query_from_proto(req: &proto::GetListProductRequest) -> AppResult<ListProductsQuery> {
    let (create_date, category, warehouse_id) = match &req.filter {
        None => (None, Category::None, 0),
        Some(filter) => {
            let create_date = filter
                .create_date
                .as_ref()
                .map(timestamp_to_datetime)
                .transpose()?;
            let category = category_from_proto(filter.category)?;
            (create_date, category, filter.warehouse_id)
        }
    };

    Ok(ListProductsQuery {
        page: req.page,
        page_size: req.page_size,
        create_date,
        category,
        warehouse_id,
    })
}
