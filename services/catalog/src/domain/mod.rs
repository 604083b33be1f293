//! Domain layer

pub mod entities;
pub mod enums;
pub mod repositories;
