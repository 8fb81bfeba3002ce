//! `FactStore` providers.

pub mod file;
pub mod memory;

pub use file::JsonFileFactStore;
pub use memory::MemoryFactStore;
