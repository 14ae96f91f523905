use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use agrostock_core::{DomainError, DomainResult, Entity, ProductCode, SupplierId};
use agrostock_parties::{Supplier, SupplierRecord};
use agrostock_products::{Product, ProductRecord};

/// Aggregate root: Inventory.
///
/// # Invariants
/// - Product codes and supplier ids are unique keys.
/// - Every product's supplier id is registered in the supplier map, and the
///   product's embedded supplier equals the registered one.
/// - Every mutation validates first and only then touches state.
///
/// Maps are ordered by key, so listings and the stored file are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "InventoryRecord", try_from = "InventoryRecord")]
pub struct Inventory {
    products: BTreeMap<ProductCode, Product>,
    suppliers: BTreeMap<SupplierId, Supplier>,
}

/// Headline figures for the inventory summary report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventorySummary {
    pub product_count: usize,
    pub supplier_count: usize,
    pub low_stock_count: usize,
    pub total_value: f64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Suppliers ───────────────────────────────────────────────────────────

    pub fn add_supplier(&mut self, supplier: Supplier) -> DomainResult<()> {
        ensure_absent(&self.suppliers, &supplier, "supplier")?;
        self.suppliers.insert(supplier.id().clone(), supplier);
        Ok(())
    }

    pub fn get_supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.get(id)
    }

    pub fn list_suppliers(&self) -> Vec<&Supplier> {
        self.suppliers.values().collect()
    }

    pub fn supplier_count(&self) -> usize {
        self.suppliers.len()
    }

    /// Replace a registered supplier and refresh the copy held by each of its
    /// products.
    pub fn update_supplier(&mut self, supplier: Supplier) -> DomainResult<()> {
        ensure_present(&self.suppliers, &supplier, "supplier")?;
        let mut refreshed = 0usize;
        for product in self.products.values_mut() {
            if product.supplier_id() == supplier.id() {
                product.set_supplier(supplier.clone());
                refreshed += 1;
            }
        }
        tracing::debug!(supplier = %supplier.id(), refreshed, "supplier updated");
        self.suppliers.insert(supplier.id().clone(), supplier);
        Ok(())
    }

    /// Remove a supplier that no product references.
    pub fn remove_supplier(&mut self, id: &str) -> DomainResult<Supplier> {
        if !self.suppliers.contains_key(id) {
            return Err(DomainError::not_found(format!("supplier {id} does not exist")));
        }
        let in_use = self.product_count_for_supplier(id);
        if in_use > 0 {
            return Err(DomainError::in_use(format!(
                "supplier {id} still supplies {in_use} product(s)"
            )));
        }
        self.suppliers
            .remove(id)
            .ok_or_else(|| DomainError::not_found(format!("supplier {id} does not exist")))
    }

    // ── Products ────────────────────────────────────────────────────────────

    /// Insert a new product.
    ///
    /// An unseen supplier is registered from the product's copy; a known one
    /// replaces that copy, so the registry stays the single source of truth.
    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        ensure_absent(&self.products, &product, "product")?;
        let product = self.resolve_supplier(product);
        self.products.insert(product.code().clone(), product);
        Ok(())
    }

    pub fn get_product(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    pub fn list_products(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    /// Replace a stored product wholesale (no field merge).
    pub fn update_product(&mut self, product: Product) -> DomainResult<()> {
        ensure_present(&self.products, &product, "product")?;
        let product = self.resolve_supplier(product);
        self.products.insert(product.code().clone(), product);
        Ok(())
    }

    pub fn remove_product(&mut self, code: &str) -> DomainResult<Product> {
        self.products
            .remove(code)
            .ok_or_else(|| DomainError::not_found(format!("product {code} does not exist")))
    }

    pub fn add_stock(&mut self, code: &str, amount: f64) -> DomainResult<&Product> {
        let product = self.product_mut(code)?;
        product.add_stock(amount)?;
        Ok(&*product)
    }

    pub fn remove_stock(&mut self, code: &str, amount: f64) -> DomainResult<&Product> {
        let product = self.product_mut(code)?;
        product.remove_stock(amount)?;
        Ok(&*product)
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// Case-insensitive substring search over code and name.
    ///
    /// The empty term matches every product; callers that want "no filter"
    /// semantics can rely on that.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        self.products.values().filter(|p| p.matches(term)).collect()
    }

    pub fn low_stock_products(&self) -> Vec<&Product> {
        self.products.values().filter(|p| p.is_low_stock()).collect()
    }

    pub fn products_by_supplier(&self, supplier_id: &str) -> Vec<&Product> {
        self.products
            .values()
            .filter(|p| p.supplier_id().as_str() == supplier_id)
            .collect()
    }

    pub fn product_count_for_supplier(&self, supplier_id: &str) -> usize {
        self.products
            .values()
            .filter(|p| p.supplier_id().as_str() == supplier_id)
            .count()
    }

    /// Number of distinct product codes (not the sum of quantities).
    pub fn total_distinct_product_count(&self) -> usize {
        self.products.len()
    }

    pub fn total_inventory_value(&self) -> f64 {
        self.products.values().map(Product::total_value).sum()
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            product_count: self.total_distinct_product_count(),
            supplier_count: self.supplier_count(),
            low_stock_count: self.products.values().filter(|p| p.is_low_stock()).count(),
            total_value: self.total_inventory_value(),
        }
    }

    // ── Records ─────────────────────────────────────────────────────────────

    pub fn to_record(&self) -> InventoryRecord {
        InventoryRecord {
            products: self.products.values().map(Product::to_record).collect(),
            suppliers: self.suppliers.values().map(Supplier::to_record).collect(),
        }
    }

    /// Rebuild an inventory from its stored shape.
    ///
    /// Suppliers load first; each product's embedded supplier is then resolved
    /// against them, so a stale embedded copy never wins over the registry.
    pub fn from_record(record: InventoryRecord) -> DomainResult<Self> {
        let mut inventory = Inventory::new();
        for supplier in record.suppliers {
            inventory.add_supplier(Supplier::from_record(supplier)?)?;
        }
        for product in record.products {
            inventory.add_product(Product::from_record(product)?)?;
        }
        Ok(inventory)
    }

    fn product_mut(&mut self, code: &str) -> DomainResult<&mut Product> {
        self.products
            .get_mut(code)
            .ok_or_else(|| DomainError::not_found(format!("product {code} does not exist")))
    }

    fn resolve_supplier(&mut self, mut product: Product) -> Product {
        match self.suppliers.get(product.supplier_id()) {
            Some(registered) => {
                if registered != product.supplier() {
                    product.set_supplier(registered.clone());
                }
            }
            None => {
                let supplier = product.supplier().clone();
                tracing::debug!(
                    supplier = %supplier.id(),
                    product = %product.code(),
                    "auto-registering supplier"
                );
                self.suppliers.insert(supplier.id().clone(), supplier);
            }
        }
        product
    }
}

/// Stored shape of the whole inventory: `{products: [...], suppliers: [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub suppliers: Vec<SupplierRecord>,
}

impl From<Inventory> for InventoryRecord {
    fn from(value: Inventory) -> Self {
        value.to_record()
    }
}

impl TryFrom<InventoryRecord> for Inventory {
    type Error = DomainError;

    fn try_from(record: InventoryRecord) -> Result<Self, Self::Error> {
        Inventory::from_record(record)
    }
}

/// Fail with `DuplicateKey` when an entity with the same key is registered.
fn ensure_absent<E>(registry: &BTreeMap<E::Id, E>, entity: &E, kind: &str) -> DomainResult<()>
where
    E: Entity,
    E::Id: core::fmt::Display,
{
    if registry.contains_key(entity.id()) {
        return Err(DomainError::duplicate(format!(
            "{kind} {} already exists",
            entity.id()
        )));
    }
    Ok(())
}

/// Fail with `NotFound` unless an entity with the same key is registered.
fn ensure_present<E>(registry: &BTreeMap<E::Id, E>, entity: &E, kind: &str) -> DomainResult<()>
where
    E: Entity,
    E::Id: core::fmt::Display,
{
    if !registry.contains_key(entity.id()) {
        return Err(DomainError::not_found(format!(
            "{kind} {} does not exist",
            entity.id()
        )));
    }
    Ok(())
}
