use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use agrostock_core::DomainError;
use agrostock_inventory::Inventory;

/// Storage operation error.
///
/// These are **infrastructure errors** (missing file, I/O, unreadable content)
/// as opposed to domain errors. A stored inventory that parses but breaks a
/// domain rule is reported as [`StorageError::Invalid`] with the domain error
/// attached.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed storage file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode inventory for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid inventory in {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The file is absent (as opposed to present but unreadable).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The file exists but its content cannot be turned into an inventory.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Invalid { .. })
    }
}

/// Durable home of the whole inventory aggregate.
///
/// Saves are whole-aggregate overwrites; there is no partial update.
///
/// ## Load Semantics
///
/// - `load()` fails with [`StorageError::NotFound`] when nothing has been saved
///   yet, and with `Malformed`/`Invalid` when stored content is unusable.
/// - `load_or_create()` turns "not found" into a fresh, persisted, empty
///   inventory. Corrupt content is still reported so the caller can decide
///   whether to reset.
pub trait InventoryStore: Send + Sync {
    /// Load the stored inventory.
    fn load(&self) -> Result<Inventory, StorageError>;

    /// Overwrite the stored inventory.
    fn save(&self, inventory: &Inventory) -> Result<(), StorageError>;

    /// Whether anything has been stored yet.
    fn exists(&self) -> bool;

    /// Load, or persist and return an empty inventory when nothing is stored.
    fn load_or_create(&self) -> Result<Inventory, StorageError> {
        match self.load() {
            Err(err) if err.is_not_found() => {
                tracing::warn!("no stored inventory found; creating an empty one");
                let inventory = Inventory::new();
                self.save(&inventory)?;
                Ok(inventory)
            }
            other => other,
        }
    }
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn load(&self) -> Result<Inventory, StorageError> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        (**self).save(inventory)
    }

    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn load_or_create(&self) -> Result<Inventory, StorageError> {
        (**self).load_or_create()
    }
}
