use std::path::Path;

use serde::Deserialize;

use crate::{
    error::extract::ExtractError,
    extract::{read_extract, Extract},
};

/// Only the order date feeds the warehouse; the other order columns are ignored.
pub const ORDER_COLUMNS: &[&str] = &["OrderDate"];

#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "OrderDate")]
    pub order_date: Option<String>,
}

pub fn read_orders(path: &Path) -> Result<Extract<OrderRecord>, ExtractError> {
    read_extract(path, ORDER_COLUMNS)
}
