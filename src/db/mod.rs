pub mod error;
#[cfg(test)]
pub mod memory;
pub mod models;
pub mod pool;
pub mod repo;
