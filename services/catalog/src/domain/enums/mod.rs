//! Domain enums

pub mod category;

pub use category::Category;
