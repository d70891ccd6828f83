pub mod warehouse_repo;
pub use warehouse_repo::{WarehouseRepository, WarehouseSource};

#[cfg(test)]
pub mod memory;
#[cfg(test)]
pub use memory::InMemoryWarehouse;
