//! Inventory domain module.
//!
//! `Inventory` is the aggregate root: the only entry point through which
//! products and suppliers are registered, queried and mutated. Pure domain
//! logic (no IO, no storage).

pub mod inventory;

pub use inventory::{Inventory, InventoryRecord, InventorySummary};
