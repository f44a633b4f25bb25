use std::path::Path;

use serde::Deserialize;

use crate::{
    error::extract::ExtractError,
    extract::{read_extract, Extract},
};

pub const PRODUCT_COLUMNS: &[&str] = &["ProductID", "ProductName", "Category", "Price", "Stock"];

/// Raw product row as found in the extract.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "ProductID")]
    pub product_id: Option<String>,
    #[serde(rename = "ProductName")]
    pub product_name: Option<String>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Price")]
    pub price: Option<String>,
    #[serde(rename = "Stock")]
    pub stock: Option<String>,
}

pub fn read_products(path: &Path) -> Result<Extract<ProductRecord>, ExtractError> {
    read_extract(path, PRODUCT_COLUMNS)
}
