use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use agrostock_inventory::Inventory;

use super::r#trait::{InventoryStore, StorageError};
use super::{decode, encode};
use crate::config::StorageConfig;

/// Timestamp format used for backup suffixes (e.g. `20251013_154210`).
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// JSON file store for the inventory.
///
/// Saves go to a sibling temporary file that is then renamed over the target,
/// so a crash mid-write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StorageConfig,
}

impl JsonFileStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        self.config.data_file()
    }

    /// Path a backup with the given suffix would be written to:
    /// `<basename>_backup_<suffix>.<ext>` in the backup directory.
    pub fn backup_path(&self, suffix: &str) -> PathBuf {
        let path = self.path();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = match path.extension() {
            Some(ext) => format!("{stem}_backup_{suffix}.{}", ext.to_string_lossy()),
            None => format!("{stem}_backup_{suffix}"),
        };
        self.config.backup_dir().join(file_name)
    }

    /// Copy the current file verbatim to a backup.
    ///
    /// Without a suffix the local time is used. Fails with
    /// [`StorageError::NotFound`] when there is nothing to back up.
    pub fn backup(&self, suffix: Option<&str>) -> Result<PathBuf, StorageError> {
        if !self.exists() {
            tracing::warn!(
                path = %self.path().display(),
                "cannot back up: storage file does not exist"
            );
            return Err(StorageError::NotFound {
                path: self.path().to_path_buf(),
            });
        }

        let suffix = match suffix {
            Some(s) => s.to_string(),
            None => Local::now().format(BACKUP_TIMESTAMP_FORMAT).to_string(),
        };
        let target = self.backup_path(&suffix);
        ensure_parent_dir(&target)?;
        fs::copy(self.path(), &target).map_err(|e| StorageError::io(&target, e))?;

        tracing::info!(backup = %target.display(), "inventory backup created");
        Ok(target)
    }

    /// Replace unusable content with a fresh empty inventory.
    ///
    /// An existing file is first backed up with a `corrupt_<timestamp>` suffix.
    pub fn reset(&self) -> Result<Inventory, StorageError> {
        if self.exists() {
            let suffix = format!("corrupt_{}", Local::now().format(BACKUP_TIMESTAMP_FORMAT));
            self.backup(Some(&suffix))?;
        }
        let inventory = Inventory::new();
        self.save(&inventory)?;
        tracing::warn!(path = %self.path().display(), "storage file reset to an empty inventory");
        Ok(inventory)
    }

    /// Remove the storage file. Returns whether a file was removed.
    pub fn delete(&self) -> Result<bool, StorageError> {
        if !self.exists() {
            return Ok(false);
        }
        fs::remove_file(self.path()).map_err(|e| StorageError::io(self.path(), e))?;
        tracing::info!(path = %self.path().display(), "storage file deleted");
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path()
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path().with_file_name(name)
    }
}

impl InventoryStore for JsonFileStore {
    fn load(&self) -> Result<Inventory, StorageError> {
        let path = self.path();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(StorageError::io(path, e)),
        };

        let inventory = decode(path, &bytes)?;
        tracing::info!(
            path = %path.display(),
            products = inventory.total_distinct_product_count(),
            suppliers = inventory.supplier_count(),
            "inventory loaded"
        );
        Ok(inventory)
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        let path = self.path();
        let text = encode(path, inventory)?;
        ensure_parent_dir(path)?;

        let tmp = self.temp_path();
        fs::write(&tmp, text).map_err(|e| StorageError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::io(path, e));
        }

        tracing::info!(
            path = %path.display(),
            products = inventory.total_distinct_product_count(),
            suppliers = inventory.supplier_count(),
            "inventory saved"
        );
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path().is_file()
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), StorageError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))
        }
        _ => Ok(()),
    }
}
