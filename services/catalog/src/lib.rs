//! catalog - 商品目录服务
//!
//! 内存商品存储 + 列表查询引擎，通过 gRPC 暴露。

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

// 引入生成的 proto 代码
pub mod catalog_v1 {
    tonic::include_proto!("catalog.v1");
}

// Re-export for convenience
pub use catalog_v1 as proto;

pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("catalog_descriptor");
