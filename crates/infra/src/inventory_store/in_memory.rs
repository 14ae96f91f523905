use std::path::Path;
use std::sync::RwLock;

use agrostock_inventory::Inventory;

use super::r#trait::{InventoryStore, StorageError};
use super::{decode, encode};

/// Label used in place of a file path in errors.
const MEMORY_PATH: &str = "<memory>";

/// In-memory inventory store.
///
/// Intended for tests/dev. Holds the encoded JSON text, so loads and saves go
/// through the same codec as the file store.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    contents: RwLock<Option<String>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored text (e.g. to exercise corrupt content).
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(text.into())),
        }
    }

    /// The last saved text, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn load(&self) -> Result<Inventory, StorageError> {
        let path = Path::new(MEMORY_PATH);
        match self.contents() {
            Some(text) => decode(path, text.as_bytes()),
            None => Err(StorageError::NotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        let text = encode(Path::new(MEMORY_PATH), inventory)?;
        let mut contents = self
            .contents
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *contents = Some(text);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.contents().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn load_before_save_is_not_found() {
        let store = InMemoryInventoryStore::new();
        assert!(!store.exists());
        assert!(store.load().unwrap_err().is_not_found());
    }

    #[test]
    fn load_or_create_persists_empty_inventory() {
        let store = InMemoryInventoryStore::new();
        let inventory = store.load_or_create().unwrap();
        assert_eq!(inventory, Inventory::new());
        assert!(store.exists());
    }

    #[test]
    fn load_or_create_reports_corrupt_content() {
        let store = InMemoryInventoryStore::with_contents("[1, 2");
        let err = store.load_or_create().unwrap_err();
        assert!(err.is_corrupt());
        assert!(!err.is_not_found());
        // Corrupt content is left for the caller to deal with.
        assert_eq!(store.contents().as_deref(), Some("[1, 2"));
    }

    #[test]
    fn works_through_shared_handle() {
        let store: Arc<dyn InventoryStore> = Arc::new(InMemoryInventoryStore::new());
        store.save(&Inventory::new()).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), Inventory::new());
    }
}
