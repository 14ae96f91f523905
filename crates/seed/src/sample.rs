use agrostock_core::DomainResult;
use agrostock_inventory::Inventory;
use agrostock_parties::{ContactInfo, Supplier};
use agrostock_products::Product;

const SUPPLIERS: [(&str, &str, &str, &str); 5] = [
    ("PROV001", "AgroInsumos del Valle", "3001234567", "contacto@agroinsumos.com"),
    ("PROV002", "Fertilizantes Nacionales S.A.", "3009876543", "ventas@fertinacionales.com"),
    ("PROV003", "Semillas El Campesino", "3005556677", "info@semillascampesino.com"),
    ("PROV004", "Herramientas Agrícolas Ltda", "3007778899", "pedidos@herragricolas.com"),
    ("PROV005", "Químicos y Plaguicidas del Sur", "3004445566", "atencion@quimisur.com"),
];

struct SampleProduct {
    code: &'static str,
    name: &'static str,
    unit: &'static str,
    intake_date: &'static str,
    supplier: &'static str,
    unit_cost: f64,
    quantity: f64,
    reorder_threshold: f64,
}

#[allow(clippy::too_many_arguments)]
const fn item(
    code: &'static str,
    name: &'static str,
    unit: &'static str,
    intake_date: &'static str,
    supplier: &'static str,
    unit_cost: f64,
    quantity: f64,
    reorder_threshold: f64,
) -> SampleProduct {
    SampleProduct {
        code,
        name,
        unit,
        intake_date,
        supplier,
        unit_cost,
        quantity,
        reorder_threshold,
    }
}

const PRODUCTS: [SampleProduct; 22] = [
    // Fertilizers
    item(
        "FERT001",
        "Fertilizante NPK 15-15-15",
        "kg",
        "01/10/2025",
        "PROV002",
        2500.0,
        500.0,
        100.0,
    ),
    item("FERT002", "Urea Granulada", "kg", "05/10/2025", "PROV002", 1800.0, 800.0, 150.0),
    item(
        "FERT003",
        "Fertilizante Orgánico Compost",
        "bulto",
        "10/10/2025",
        "PROV001",
        35000.0,
        50.0,
        20.0,
    ),
    item("FERT004", "Abono Triple 15", "kg", "12/10/2025", "PROV002", 2200.0, 300.0, 80.0),
    // Seeds
    item("SEM001", "Semilla de Maíz Híbrido", "kg", "02/10/2025", "PROV003", 45000.0, 120.0, 30.0),
    item("SEM002", "Semilla de Frijol", "kg", "03/10/2025", "PROV003", 12000.0, 80.0, 25.0),
    item("SEM003", "Semilla de Arveja", "kg", "08/10/2025", "PROV003", 15000.0, 60.0, 20.0),
    item("SEM004", "Semilla de Tomate Cherry", "kg", "11/10/2025", "PROV003", 180000.0, 15.0, 10.0),
    // Pesticides
    item("PLAG001", "Herbicida Glifosato", "litro", "04/10/2025", "PROV005", 25000.0, 200.0, 50.0),
    item(
        "PLAG002",
        "Insecticida Cipermetrina",
        "litro",
        "06/10/2025",
        "PROV005",
        32000.0,
        150.0,
        40.0,
    ),
    item("PLAG003", "Fungicida Mancozeb", "kg", "09/10/2025", "PROV005", 18000.0, 90.0, 30.0),
    item("PLAG004", "Acaricida Abamectina", "litro", "13/10/2025", "PROV005", 55000.0, 8.0, 15.0),
    // Tools
    item("HERR001", "Azadón con Mango", "unidad", "07/10/2025", "PROV004", 35000.0, 45.0, 20.0),
    item("HERR002", "Pala Redonda", "unidad", "07/10/2025", "PROV004", 28000.0, 38.0, 15.0),
    item("HERR003", "Rastrillo Metálico", "unidad", "10/10/2025", "PROV004", 22000.0, 30.0, 10.0),
    item("HERR004", "Carretilla 60L", "unidad", "12/10/2025", "PROV004", 85000.0, 12.0, 8.0),
    // Supplies
    item("INS001", "Cal Agrícola", "bulto", "03/10/2025", "PROV001", 18000.0, 200.0, 50.0),
    item("INS002", "Tierra Abonada", "m3", "05/10/2025", "PROV001", 45000.0, 25.0, 10.0),
    item(
        "INS003",
        "Manguera de Riego 1/2 pulgada",
        "unidad",
        "08/10/2025",
        "PROV004",
        35000.0,
        40.0,
        15.0,
    ),
    item("INS004", "Aspersor Rotativo", "unidad", "11/10/2025", "PROV004", 28000.0, 5.0, 10.0),
    // Critically low
    item("CRIT001", "Abono Foliar Premium", "litro", "13/10/2025", "PROV001", 42000.0, 3.0, 15.0),
    item("CRIT002", "Semilla Cebolla Junca", "kg", "13/10/2025", "PROV003", 95000.0, 2.0, 10.0),
];

/// Build the sample inventory: five suppliers and 22 products, four of them
/// at or below their reorder threshold.
pub fn inventory() -> DomainResult<Inventory> {
    let mut inventory = Inventory::new();

    for (id, name, phone, email) in SUPPLIERS {
        let supplier = Supplier::new(id, name)?.with_contact(ContactInfo::new(phone, email));
        inventory.add_supplier(supplier)?;
    }

    for p in &PRODUCTS {
        // Only a placeholder with the right id is needed; the inventory swaps
        // in the registered supplier.
        let supplier = Supplier::new(p.supplier, p.supplier)?;
        let product = Product::new(p.code, p.name, p.unit, p.intake_date, supplier, p.unit_cost)?
            .with_quantity(p.quantity)?
            .with_reorder_threshold(p.reorder_threshold)?;
        inventory.add_product(product)?;
    }

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_expected_shape() {
        let inventory = inventory().unwrap();
        let summary = inventory.summary();
        assert_eq!(summary.product_count, 22);
        assert_eq!(summary.supplier_count, 5);
        assert_eq!(summary.low_stock_count, 4);
    }

    #[test]
    fn low_stock_products_are_the_flagged_ones() {
        let inventory = inventory().unwrap();
        let mut codes: Vec<&str> = inventory
            .low_stock_products()
            .iter()
            .map(|p| p.code().as_str())
            .collect();
        codes.sort_unstable();
        assert_eq!(codes, ["CRIT001", "CRIT002", "INS004", "PLAG004"]);
    }

    #[test]
    fn products_carry_registered_supplier_details() {
        let inventory = inventory().unwrap();
        let product = inventory.get_product("SEM004").unwrap();
        assert_eq!(product.supplier().name(), "Semillas El Campesino");
        assert_eq!(product.supplier().email(), "info@semillascampesino.com");
        assert_eq!(inventory.product_count_for_supplier("PROV004"), 6);
    }
}
