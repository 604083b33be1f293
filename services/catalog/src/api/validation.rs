//! 请求校验
//!
//! 业务范围校验全部在这一层完成，核心层只接收类型正确的输入。
//! 列表请求只拦截负的分页参数，极端取值的行为由查询引擎自己定义。

use errors::{AppError, AppResult};

use crate::domain::enums::Category;
use crate::proto;

const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 128;

pub fn validate_create_product(req: &proto::CreateProductRequest) -> AppResult<()> {
    let name_len = req.name.chars().count();
    if name_len < NAME_MIN_LEN || name_len > NAME_MAX_LEN {
        return Err(AppError::validation(format!(
            "'name' must be between {} and {} characters",
            NAME_MIN_LEN, NAME_MAX_LEN
        )));
    }

    if !(req.price.is_finite() && req.price > 0.0) {
        return Err(AppError::validation("'price' must be greater than 0"));
    }

    if !(req.weight.is_finite() && req.weight > 0.0) {
        return Err(AppError::validation("'weight' must be greater than 0"));
    }

    if req.warehouse_id <= 0 {
        return Err(AppError::validation("'warehouse_id' must be greater than 0"));
    }

    match Category::from_code(req.category) {
        Some(Category::None) => Err(AppError::validation(
            "'category' cannot have the value 'None'",
        )),
        Some(_) => Ok(()),
        None => Err(AppError::validation(format!(
            "'category' has unknown value {}",
            req.category
        ))),
    }
}

pub fn validate_update_price(req: &proto::UpdatePriceProductRequest) -> AppResult<()> {
    if req.id <= 0 {
        return Err(AppError::validation("'id' must be greater than 0"));
    }

    if !(req.price.is_finite() && req.price > 0.0) {
        return Err(AppError::validation("'price' must be greater than 0"));
    }

    Ok(())
}

pub fn validate_get_list(req: &proto::GetListProductRequest) -> AppResult<()> {
    if req.page < 0 {
        return Err(AppError::validation("'page' must not be negative"));
    }

    if req.page_size < 0 {
        return Err(AppError::validation("'page_size' must not be negative"));
    }

    Ok(())
}
