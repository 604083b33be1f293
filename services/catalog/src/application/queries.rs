//! 商品列表查询引擎
//!
//! 纯函数：输入商品快照和查询条件，输出一页商品。无副作用，无 IO。

use chrono::{DateTime, Utc};

use crate::domain::entities::Product;
use crate::domain::enums::Category;

/// 未指定 page_size 时的默认每页条数
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// 商品列表查询
///
/// 三个过滤条件各有一个"不过滤"哨兵值：仓库 0、分类 `None`、日期缺省。
#[derive(Debug, Clone)]
pub struct ListProductsQuery {
    /// 页号，从 1 开始；非正值按第一页处理
    pub page: i32,
    /// 每页条数；0 表示使用默认值
    pub page_size: i32,
    /// 创建时间过滤，精确到时刻
    pub create_date: Option<DateTime<Utc>>,
    pub category: Category,
    pub warehouse_id: i64,
}

impl Default for ListProductsQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 0,
            create_date: None,
            category: Category::None,
            warehouse_id: 0,
        }
    }
}

/// 对快照应用过滤和分页
///
/// 边界策略（page 和 page_size 刻意不对称）：
/// - 非正 page 按第一页处理；超出范围的 page 返回空页，不报错不回绕；
/// - 负 page_size 返回空页；极大 page_size 返回全部匹配项，
///   结果规模只受数据量约束。
///
/// 过滤在跳页之前进行，快照顺序保持不变。
pub fn page_products(snapshot: Vec<Product>, query: &ListProductsQuery) -> Vec<Product> {
    let page_size = if query.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        query.page_size
    };
    if page_size < 0 {
        return Vec::new();
    }

    let skip = if query.page <= 0 {
        0
    } else {
        // i64 乘法不会溢出（两个因子都不超过 i32::MAX）；
        // 超出 usize 可表示范围时取最大值，等价于空页
        let skip = i64::from(query.page - 1) * i64::from(page_size);
        usize::try_from(skip).unwrap_or(usize::MAX)
    };

    let warehouse_matches =
        |p: &Product| query.warehouse_id == 0 || query.warehouse_id == p.warehouse_id;
    let category_matches = |p: &Product| query.category.is_none() || query.category == p.category;
    let date_matches = |p: &Product| match query.create_date {
        None => true,
        Some(date) => date == p.create_date,
    };

    snapshot
        .into_iter()
        .filter(|p| warehouse_matches(p) && category_matches(p) && date_matches(p))
        .skip(skip)
        .take(page_size as usize)
        .collect()
}
