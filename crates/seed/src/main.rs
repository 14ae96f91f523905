//! Populates the storage file with a sample dataset.
//!
//! `AGROSTOCK_DATA_FILE` selects the storage file and `AGROSTOCK_BACKUP_DIR`
//! where backups go. An existing file is backed up before being replaced.

mod sample;

use anyhow::Context;

use agrostock_infra::{DEFAULT_DATA_FILE, InventoryStore, JsonFileStore, StorageConfig};

fn storage_config() -> StorageConfig {
    let data_file = std::env::var("AGROSTOCK_DATA_FILE").unwrap_or_else(|_| {
        tracing::warn!("AGROSTOCK_DATA_FILE not set; using {DEFAULT_DATA_FILE}");
        DEFAULT_DATA_FILE.to_string()
    });

    let config = StorageConfig::new(data_file);
    match std::env::var("AGROSTOCK_BACKUP_DIR") {
        Ok(dir) => config.with_backup_dir(dir),
        Err(_) => config,
    }
}

fn main() -> anyhow::Result<()> {
    agrostock_observability::init();

    let store = JsonFileStore::new(storage_config());
    if store.exists() {
        store
            .backup(Some("before_seed"))
            .context("backing up existing inventory")?;
    }

    let inventory = sample::inventory().context("building sample inventory")?;
    store.save(&inventory).context("saving sample inventory")?;

    let summary = inventory.summary();
    tracing::info!(
        path = %store.path().display(),
        products = summary.product_count,
        suppliers = summary.supplier_count,
        low_stock = summary.low_stock_count,
        total_value = summary.total_value,
        "sample inventory written"
    );

    for product in inventory.low_stock_products() {
        tracing::warn!(
            code = %product.code(),
            name = product.name(),
            quantity = product.quantity(),
            unit = product.unit(),
            reorder_threshold = product.reorder_threshold(),
            "needs restocking"
        );
    }

    Ok(())
}
