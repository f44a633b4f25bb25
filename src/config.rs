use std::path::PathBuf;

use crate::error::config::ConfigError;

pub const DEFAULT_CUSTOMERS_CSV: &str = "customers.csv";
pub const DEFAULT_PRODUCTS_CSV: &str = "products.csv";
pub const DEFAULT_ORDERS_CSV: &str = "orders.csv";
pub const DEFAULT_LOG_FILE: &str = "dimload.log";
/// Years appended to the last observed order date when building the calendar.
pub const DEFAULT_CALENDAR_EXTRA_YEARS: u32 = 2;

pub struct Config {
    pub database_url: String,
    pub customers_csv: PathBuf,
    pub products_csv: PathBuf,
    pub orders_csv: PathBuf,
    pub calendar_extra_years: u32,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            customers_csv: optional_var("CUSTOMERS_CSV")
                .unwrap_or_else(|| DEFAULT_CUSTOMERS_CSV.to_string())
                .into(),
            products_csv: optional_var("PRODUCTS_CSV")
                .unwrap_or_else(|| DEFAULT_PRODUCTS_CSV.to_string())
                .into(),
            orders_csv: optional_var("ORDERS_CSV")
                .unwrap_or_else(|| DEFAULT_ORDERS_CSV.to_string())
                .into(),
            calendar_extra_years: match optional_var("CALENDAR_EXTRA_YEARS") {
                Some(value) => parse_extra_years(&value)?,
                None => DEFAULT_CALENDAR_EXTRA_YEARS,
            },
            log_file: optional_var("LOG_FILE")
                .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
                .into(),
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    optional_var(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// Unset and blank variables are both treated as absent.
fn optional_var(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_extra_years(value: &str) -> Result<u32, ConfigError> {
    value
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: "CALENDAR_EXTRA_YEARS".to_string(),
            reason: e.to_string(),
        })
}
