//! Inventory persistence boundary.
//!
//! The stored format is a UTF-8 JSON document `{"products": [...], "suppliers": [...]}`
//! pretty printed with four-space indentation. Each product embeds its full
//! supplier record.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryInventoryStore;
pub use json_file::JsonFileStore;
pub use r#trait::{InventoryStore, StorageError};

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use agrostock_inventory::{Inventory, InventoryRecord};

/// Encode an inventory as the stored JSON text.
pub(crate) fn encode(path: &Path, inventory: &Inventory) -> Result<String, StorageError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    inventory
        .to_record()
        .serialize(&mut serializer)
        .map_err(|source| StorageError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    buf.push(b'\n');
    // serde_json only ever writes UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Decode stored bytes into an inventory.
///
/// Syntax, shape and encoding problems (including invalid UTF-8) are
/// `Malformed`; domain rule violations (duplicate keys, negative quantities,
/// blank names) are `Invalid`.
pub(crate) fn decode(path: &Path, bytes: &[u8]) -> Result<Inventory, StorageError> {
    let record: InventoryRecord =
        serde_json::from_slice(bytes).map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    Inventory::from_record(record).map_err(|source| StorageError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}
