//! Full load orchestration.
//!
//! Runs the five loaders in dependency order against one warehouse
//! connection. Categories load first because products resolve their category
//! keys against the freshly written category table.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::Error,
    extract::{
        customer::read_customers, order::read_orders, product::read_products, Extract,
    },
    model::summary::LoadSummary,
    service::{
        calendar::CalendarLoader, category::CategoryLoader, customer::CustomerLoader,
        product::ProductLoader, warehouse::WarehouseLoader,
    },
    startup::ConnectionManager,
};

const BANNER: &str = "============================================================";

/// Extract locations and calendar settings of one full load.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    pub customers_csv: PathBuf,
    pub products_csv: PathBuf,
    pub orders_csv: PathBuf,
    pub calendar_extra_years: u32,
}

impl From<&Config> for LoadPlan {
    fn from(config: &Config) -> Self {
        Self {
            customers_csv: config.customers_csv.clone(),
            products_csv: config.products_csv.clone(),
            orders_csv: config.orders_csv.clone(),
            calendar_extra_years: config.calendar_extra_years,
        }
    }
}

pub struct EtlOrchestrator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EtlOrchestrator<'a> {
    /// Creates a new instance of [`EtlOrchestrator`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs category, customer, product, warehouse and calendar loads in that order
    ///
    /// Stops at the first failed step; tables loaded before it keep their new
    /// contents.
    pub async fn run(&self, plan: &LoadPlan) -> Result<LoadSummary, Error> {
        tracing::info!("{}", BANNER);
        tracing::info!("Starting full warehouse load");
        tracing::info!("{}", BANNER);

        let result = self.run_steps(plan).await;

        match &result {
            Ok(summary) => {
                tracing::info!("{}", BANNER);
                tracing::info!(
                    "Full warehouse load completed: {} categories, {} customers, {} products, {} warehouses, {} calendar days",
                    summary.categories,
                    summary.customers.loaded,
                    summary.products.loaded,
                    summary.warehouses,
                    summary.calendar_days
                );
                tracing::info!("{}", BANNER);
            }
            Err(e) => tracing::error!("Full warehouse load failed: {}", e),
        }

        result
    }

    async fn run_steps(&self, plan: &LoadPlan) -> Result<LoadSummary, Error> {
        let products = read_products(&plan.products_csv)?;
        log_extract("product", &products);
        let categories = CategoryLoader::new(self.db).load(&products).await?;

        let customers = read_customers(&plan.customers_csv)?;
        log_extract("customer", &customers);
        let customer_report = CustomerLoader::new(self.db).load(&customers).await?;

        let product_report = ProductLoader::new(self.db)
            .load(&products, &categories)
            .await?;

        let warehouses = WarehouseLoader::new(self.db).load().await?;

        let orders = read_orders(&plan.orders_csv)?;
        log_extract("order", &orders);
        let calendar_days = CalendarLoader::new(self.db)
            .load(&orders, plan.calendar_extra_years)
            .await?;

        Ok(LoadSummary {
            categories: categories.len() as u64,
            customers: customer_report,
            products: product_report,
            warehouses,
            calendar_days,
        })
    }
}

fn log_extract<T>(kind: &str, extract: &Extract<T>) {
    if extract.is_empty() {
        tracing::warn!("The {} extract {} has no rows", kind, extract.path.display());
    } else {
        tracing::info!(
            "Read {} {} rows from {}",
            extract.len(),
            kind,
            extract.path.display()
        );
    }
}

/// Connects to the warehouse, runs the full load and closes the connection.
///
/// The connection is closed whether or not the load succeeds.
pub async fn run_full_load(database_url: &str, plan: &LoadPlan) -> Result<LoadSummary, Error> {
    let connection = ConnectionManager::connect(database_url).await?;

    let result = EtlOrchestrator::new(connection.db()).run(plan).await;

    connection.close().await;

    result
}
