//! Storage configuration.
//!
//! Paths are always handed to the store explicitly; nothing here looks at the
//! process environment or working directory.

use std::path::{Path, PathBuf};

/// File name used when the caller has no preference.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Where the inventory file and its backups live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    data_file: PathBuf,
    backup_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            backup_dir: None,
        }
    }

    /// Write backups into `dir` instead of next to the data file.
    pub fn with_backup_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.backup_dir = Some(dir.into());
        self
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Directory receiving backups: the configured one, or the data file's parent.
    pub fn backup_dir(&self) -> PathBuf {
        match &self.backup_dir {
            Some(dir) => dir.clone(),
            None => match self.data_file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        }
    }
}
