//! Infrastructure layer: inventory storage file and its configuration.

pub mod config;
pub mod inventory_store;

pub use config::{DEFAULT_DATA_FILE, StorageConfig};
pub use inventory_store::{InMemoryInventoryStore, InventoryStore, JsonFileStore, StorageError};
