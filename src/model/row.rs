//! Cleaned dimension rows ready for insertion.

/// Status written to every customer, product and warehouse row.
pub const ACTIVE_STATUS: &str = "Active";
/// Stand-in for a missing customer city or country.
pub const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    pub customer_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub product_id: i64,
    pub name: Option<String>,
    pub price: f64,
    pub stock: i32,
}

/// The placeholder warehouse every load writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseRow {
    pub warehouse_id: i32,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
}

pub const PLACEHOLDER_WAREHOUSE: WarehouseRow = WarehouseRow {
    warehouse_id: 1,
    name: "Central Warehouse",
    city: "Main City",
    country: "Country",
};
