use serde::{Deserialize, Serialize};

use agrostock_core::{DomainError, DomainResult, Entity, ProductCode, SupplierId, validate};
use agrostock_parties::{Supplier, SupplierRecord};

/// Reorder threshold applied when none is given.
pub const DEFAULT_REORDER_THRESHOLD: f64 = 10.0;

/// Entity: Product (a stocked agricultural supply).
///
/// # Invariants
/// - `code` and `name` are non-blank; `code` never changes after creation.
/// - `unit_cost`, `quantity` and `reorder_threshold` are finite and `>= 0`,
///   enforced on every mutator, not only at construction.
/// - The product carries its own copy of exactly one [`Supplier`]; keeping that
///   copy in sync with the supplier registry is the inventory's job.
///
/// Amounts are plain `f64`. Whole amounts add and remove exactly; fractional
/// ones may leave rounding residue (adding then removing `0.2` from `0.1`
/// gives `0.10000000000000003`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ProductRecord", try_from = "ProductRecord")]
pub struct Product {
    code: ProductCode,
    name: String,
    unit: String,
    intake_date: String,
    supplier: Supplier,
    unit_cost: f64,
    quantity: f64,
    reorder_threshold: f64,
}

impl Product {
    /// Create a product with zero stock and the default reorder threshold.
    ///
    /// Use [`Product::with_quantity`] and [`Product::with_reorder_threshold`]
    /// for the optional values.
    pub fn new(
        code: impl Into<ProductCode>,
        name: impl Into<String>,
        unit: impl Into<String>,
        intake_date: impl Into<String>,
        supplier: Supplier,
        unit_cost: f64,
    ) -> DomainResult<Self> {
        let code = code.into();
        let name = name.into();
        if code.is_blank() {
            return Err(DomainError::validation("product code cannot be empty"));
        }
        validate::non_blank("product name", &name)?;
        validate::non_negative("unit cost", unit_cost)?;

        Ok(Self {
            code,
            name,
            unit: unit.into(),
            intake_date: intake_date.into(),
            supplier,
            unit_cost,
            quantity: 0.0,
            reorder_threshold: DEFAULT_REORDER_THRESHOLD,
        })
    }

    pub fn with_quantity(mut self, quantity: f64) -> DomainResult<Self> {
        self.set_quantity(quantity)?;
        Ok(self)
    }

    pub fn with_reorder_threshold(mut self, threshold: f64) -> DomainResult<Self> {
        self.set_reorder_threshold(threshold)?;
        Ok(self)
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Free-form intake date as entered (not parsed).
    pub fn intake_date(&self) -> &str {
        &self.intake_date
    }

    pub fn supplier(&self) -> &Supplier {
        &self.supplier
    }

    pub fn supplier_id(&self) -> &SupplierId {
        self.supplier.id()
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn reorder_threshold(&self) -> f64 {
        self.reorder_threshold
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate::non_blank("product name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    pub fn set_intake_date(&mut self, intake_date: impl Into<String>) {
        self.intake_date = intake_date.into();
    }

    pub fn set_unit_cost(&mut self, unit_cost: f64) -> DomainResult<()> {
        validate::non_negative("unit cost", unit_cost)?;
        self.unit_cost = unit_cost;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: f64) -> DomainResult<()> {
        validate::non_negative("quantity", quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_reorder_threshold(&mut self, threshold: f64) -> DomainResult<()> {
        validate::non_negative("reorder threshold", threshold)?;
        self.reorder_threshold = threshold;
        Ok(())
    }

    /// Point the product at another supplier.
    ///
    /// Only a constructed [`Supplier`] can be passed, so there is nothing left to
    /// validate here.
    pub fn set_supplier(&mut self, supplier: Supplier) {
        self.supplier = supplier;
    }

    /// Receive stock. `amount` must be greater than zero.
    pub fn add_stock(&mut self, amount: f64) -> DomainResult<()> {
        validate::positive("amount to add", amount)?;
        let new_quantity = self.quantity + amount;
        validate::non_negative("quantity", new_quantity)?;
        self.quantity = new_quantity;
        Ok(())
    }

    /// Withdraw stock. Fails without side effects when `amount` exceeds the
    /// quantity on hand.
    pub fn remove_stock(&mut self, amount: f64) -> DomainResult<()> {
        validate::positive("amount to remove", amount)?;
        if amount > self.quantity {
            return Err(DomainError::insufficient_stock(amount, self.quantity));
        }
        self.quantity -= amount;
        Ok(())
    }

    /// At or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_threshold
    }

    /// Inventory value of this product: `quantity × unit_cost`.
    pub fn total_value(&self) -> f64 {
        self.quantity * self.unit_cost
    }

    /// Case-insensitive substring match against code or name.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.code.as_str().to_lowercase().contains(&term)
    }

    pub fn to_record(&self) -> ProductRecord {
        ProductRecord::from(self.clone())
    }

    pub fn from_record(record: ProductRecord) -> DomainResult<Self> {
        Self::try_from(record)
    }
}

impl Entity for Product {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} ({}) - Stock: {} {}",
            self.name, self.code, self.quantity, self.unit
        )
    }
}

fn default_reorder_threshold() -> f64 {
    DEFAULT_REORDER_THRESHOLD
}

/// Stored shape of a product. The supplier is embedded in full so every product
/// record is self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub code: ProductCode,
    pub name: String,
    pub unit: String,
    pub intake_date: String,
    pub supplier: SupplierRecord,
    pub unit_cost: f64,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default = "default_reorder_threshold")]
    pub reorder_threshold: f64,
}

impl From<Product> for ProductRecord {
    fn from(value: Product) -> Self {
        Self {
            code: value.code,
            name: value.name,
            unit: value.unit,
            intake_date: value.intake_date,
            supplier: SupplierRecord::from(value.supplier),
            unit_cost: value.unit_cost,
            quantity: value.quantity,
            reorder_threshold: value.reorder_threshold,
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        // Supplier first: the product cannot exist without it.
        let supplier = Supplier::from_record(record.supplier)?;
        Product::new(
            record.code,
            record.name,
            record.unit,
            record.intake_date,
            supplier,
            record.unit_cost,
        )?
        .with_quantity(record.quantity)?
        .with_reorder_threshold(record.reorder_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_supplier() -> Supplier {
        Supplier::new("S1", "Acme").unwrap()
    }

    fn test_product(quantity: f64, threshold: f64) -> Product {
        Product::new("P1", "Seed", "kg", "01/10/2025", test_supplier(), 100.0)
            .unwrap()
            .with_quantity(quantity)
            .unwrap()
            .with_reorder_threshold(threshold)
            .unwrap()
    }

    #[test]
    fn new_applies_defaults() {
        let product =
            Product::new("P1", "Seed", "kg", "01/10/2025", test_supplier(), 100.0).unwrap();
        assert_eq!(product.quantity(), 0.0);
        assert_eq!(product.reorder_threshold(), DEFAULT_REORDER_THRESHOLD);
        assert_eq!(product.supplier_id().as_str(), "S1");
    }

    #[test]
    fn new_rejects_invalid_values() {
        assert!(matches!(
            Product::new("P1", " ", "kg", "", test_supplier(), 1.0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Product::new("", "Seed", "kg", "", test_supplier(), 1.0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Product::new("P1", "Seed", "kg", "", test_supplier(), -1.0),
            Err(DomainError::Validation(_))
        ));
        let product = Product::new("P1", "Seed", "kg", "", test_supplier(), 1.0).unwrap();
        assert!(product.clone().with_quantity(-1.0).is_err());
        assert!(product.with_reorder_threshold(-0.1).is_err());
    }

    #[test]
    fn setters_validate_before_mutating() {
        let mut product = test_product(5.0, 10.0);

        assert!(product.set_name("").is_err());
        assert!(product.set_unit_cost(-5.0).is_err());
        assert!(product.set_quantity(-1.0).is_err());
        assert!(product.set_reorder_threshold(-1.0).is_err());
        assert!(product.set_quantity(f64::NAN).is_err());
        assert_eq!(product, test_product(5.0, 10.0));

        product.set_name("Maize Seed").unwrap();
        product.set_unit("bag");
        product.set_intake_date("02/10/2025");
        product.set_unit_cost(0.0).unwrap();
        product.set_quantity(0.0).unwrap();
        product.set_reorder_threshold(0.0).unwrap();
        assert_eq!(product.name(), "Maize Seed");
        assert_eq!(product.unit(), "bag");
        assert_eq!(product.intake_date(), "02/10/2025");
        assert_eq!(product.total_value(), 0.0);
    }

    #[test]
    fn set_supplier_replaces_reference() {
        let mut product = test_product(5.0, 10.0);
        product.set_supplier(Supplier::new("S2", "Other").unwrap());
        assert_eq!(product.supplier_id().as_str(), "S2");
    }

    #[test]
    fn add_stock_rejects_non_positive_amounts() {
        let mut product = test_product(5.0, 10.0);
        assert!(matches!(product.add_stock(0.0), Err(DomainError::Validation(_))));
        assert!(matches!(product.add_stock(-3.0), Err(DomainError::Validation(_))));
        assert_eq!(product.quantity(), 5.0);

        product.add_stock(10.0).unwrap();
        assert_eq!(product.quantity(), 15.0);
    }

    #[test]
    fn fractional_stock_round_trip_is_within_rounding() {
        let mut product = test_product(0.1, 10.0);
        product.add_stock(0.2).unwrap();
        product.remove_stock(0.2).unwrap();
        assert!((product.quantity() - 0.1).abs() < 1e-12);
        assert!(product.quantity() >= 0.0);
    }

    #[test]
    fn remove_stock_reports_available_quantity() {
        let mut product = test_product(5.0, 10.0);
        let err = product.remove_stock(8.0).unwrap_err();
        match &err {
            DomainError::InsufficientStock {
                requested,
                available,
            } => {
                assert_eq!(*requested, 8.0);
                assert_eq!(*available, 5.0);
            }
            other => panic!("Expected InsufficientStock error, got {other:?}"),
        }
        assert!(err.to_string().contains("available 5"));
        assert_eq!(product.quantity(), 5.0);

        assert!(matches!(product.remove_stock(0.0), Err(DomainError::Validation(_))));
        product.remove_stock(5.0).unwrap();
        assert_eq!(product.quantity(), 0.0);
    }

    #[test]
    fn low_stock_includes_threshold_boundary() {
        assert!(test_product(10.0, 10.0).is_low_stock());
        assert!(test_product(9.0, 10.0).is_low_stock());
        assert!(!test_product(10.5, 10.0).is_low_stock());
    }

    #[test]
    fn total_value_is_quantity_times_cost() {
        assert_eq!(test_product(5.0, 10.0).total_value(), 500.0);
    }

    #[test]
    fn matches_code_or_name_case_insensitively() {
        let product = Product::new(
            "FERT002",
            "Urea Granulada",
            "kg",
            "05/10/2025",
            test_supplier(),
            1800.0,
        )
        .unwrap();
        assert!(product.matches("fert"));
        assert!(product.matches("GRANUL"));
        assert!(product.matches(""));
        assert!(!product.matches("seed"));
    }

    #[test]
    fn serializes_with_embedded_supplier_and_camel_case_keys() {
        let json = serde_json::to_value(test_product(5.0, 10.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "P1",
                "name": "Seed",
                "unit": "kg",
                "intakeDate": "01/10/2025",
                "supplier": {"id": "S1", "name": "Acme", "phone": "", "email": ""},
                "unitCost": 100.0,
                "quantity": 5.0,
                "reorderThreshold": 10.0,
            })
        );
    }

    #[test]
    fn deserialize_defaults_quantity_and_threshold() {
        let product: Product = serde_json::from_str(
            r#"{
                "code": "P1",
                "name": "Seed",
                "unit": "kg",
                "intakeDate": "01/10/2025",
                "supplier": {"id": "S1", "name": "Acme"},
                "unitCost": 100
            }"#,
        )
        .unwrap();
        assert_eq!(product.quantity(), 0.0);
        assert_eq!(product.reorder_threshold(), 10.0);
        assert_eq!(product.supplier().name(), "Acme");
    }

    #[test]
    fn deserialize_rejects_negative_quantity() {
        let mut record = test_product(5.0, 10.0).to_record();
        record.quantity = -2.0;
        assert!(matches!(
            Product::from_record(record),
            Err(DomainError::Validation(_))
        ));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: adding then removing the same whole amount restores the
            /// quantity exactly. Fractional amounts are subject to `f64` rounding
            /// (0.1 + 0.2 - 0.2 != 0.1), so only integral values are generated.
            #[test]
            fn add_then_remove_whole_amount_restores_quantity(
                start in 0u32..100_000,
                amount in 1u32..100_000,
            ) {
                let mut product = test_product(start as f64, 10.0);
                product.add_stock(amount as f64).unwrap();
                product.remove_stock(amount as f64).unwrap();
                prop_assert_eq!(product.quantity(), start as f64);
            }

            /// Property: over-withdrawal always fails and leaves quantity unchanged.
            #[test]
            fn over_withdrawal_is_rejected(
                start in 0u32..100_000,
                excess in 1u32..100_000,
            ) {
                let mut product = test_product(start as f64, 10.0);
                let requested = start as f64 + excess as f64;
                let result = product.remove_stock(requested);
                let is_insufficient =
                    matches!(result, Err(DomainError::InsufficientStock { .. }));
                prop_assert!(is_insufficient);
                prop_assert_eq!(product.quantity(), start as f64);
            }

            /// Property: low stock iff quantity <= threshold.
            #[test]
            fn low_stock_matches_comparison(
                quantity in 0u32..1_000,
                threshold in 0u32..1_000,
            ) {
                let product = test_product(quantity as f64, threshold as f64);
                prop_assert_eq!(product.is_low_stock(), quantity <= threshold);
            }

            /// Property: a product survives a JSON round trip unchanged.
            #[test]
            fn json_round_trip(
                code in "[A-Z]{2,5}[0-9]{3}",
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                cost in 0u32..1_000_000,
                quantity in 0u32..10_000,
                threshold in 0u32..500,
            ) {
                let product =
                    Product::new(code, name, "kg", "01/10/2025", test_supplier(), cost as f64)
                        .unwrap()
                        .with_quantity(quantity as f64)
                        .unwrap()
                        .with_reorder_threshold(threshold as f64)
                        .unwrap();
                let json = serde_json::to_string(&product).unwrap();
                let back: Product = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(back, product);
            }
        }
    }
}
