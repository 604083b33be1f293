//! 商品分类

use serde::{Deserialize, Serialize};

/// 商品分类
///
/// `None` 是哨兵值：商品本身不允许使用，列表过滤时表示不按分类过滤。
/// 判别值与 proto 枚举保持一致。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Category {
    #[default]
    None = 0,
    General = 1,
    HouseholdChemicals = 2,
    Technique = 3,
    Goods = 4,
}

impl Category {
    /// 按 proto 判别值解析分类，未知值返回 `None`（语义上无此分类）
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::General),
            2 => Some(Self::HouseholdChemicals),
            3 => Some(Self::Technique),
            4 => Some(Self::Goods),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// 是否为"不过滤"哨兵值
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}
