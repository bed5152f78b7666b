pub mod db;
pub mod filter;
pub mod memory;
pub mod models;
pub mod pagination;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use store::{PgStore, Store, StoreError, StoreResult};
