use std::path::Path;

use serde::Deserialize;

use crate::{
    error::extract::ExtractError,
    extract::{read_extract, Extract},
};

pub const CUSTOMER_COLUMNS: &[&str] = &[
    "CustomerID",
    "FirstName",
    "LastName",
    "Email",
    "Phone",
    "City",
    "Country",
];

/// Raw customer row as found in the extract.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "CustomerID")]
    pub customer_id: Option<String>,
    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
}

pub fn read_customers(path: &Path) -> Result<Extract<CustomerRecord>, ExtractError> {
    read_extract(path, CUSTOMER_COLUMNS)
}
