//! Persistence implementations

pub mod memory;

pub use memory::InMemoryProductRepository;
