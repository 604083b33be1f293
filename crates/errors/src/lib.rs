//! errors - 统一错误处理

use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = AppError::not_found("no product found with this ID");
        assert_eq!(err.to_string(), "Not found: no product found with this ID");
    }

    #[test]
    fn test_constructors_pick_variant() {
        assert!(matches!(
            AppError::already_exists("id 1"),
            AppError::AlreadyExists(_)
        ));
        assert!(matches!(AppError::validation("bad"), AppError::Validation(_)));
        assert!(matches!(AppError::internal("boom"), AppError::Internal(_)));
    }
}
