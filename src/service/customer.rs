use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::customer::CustomerRepository,
    error::Error,
    extract::{CustomerRecord, Extract},
    model::{
        row::{CustomerRow, UNKNOWN_LOCATION},
        summary::LoadReport,
    },
    service::{commit_or_rollback, parse_natural_key},
    util::clean::clean_phone,
};

pub struct CustomerLoader<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerLoader<'a> {
    /// Creates a new instance of [`CustomerLoader`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the customer dimension with the cleaned customer extract
    ///
    /// A row that fails to insert is logged and skipped; it does not abort the
    /// rows around it.
    pub async fn load(&self, customers: &Extract<CustomerRecord>) -> Result<LoadReport, Error> {
        tracing::info!("Loading dim_customer");

        let txn = self.db.begin().await?;
        let result = replace_customers(&txn, &customers.records).await;
        let report = commit_or_rollback(txn, "dim_customer", result).await?;

        tracing::info!(
            "dim_customer loaded: {} rows ({} skipped)",
            report.loaded,
            report.skipped
        );

        Ok(report)
    }
}

async fn replace_customers(
    txn: &DatabaseTransaction,
    customers: &[CustomerRecord],
) -> Result<LoadReport, Error> {
    CustomerRepository::new(txn).truncate().await?;

    let mut report = LoadReport::default();

    for customer in customers {
        let savepoint = txn.begin().await?;

        match insert_customer(&savepoint, customer).await {
            Ok(()) => {
                savepoint.commit().await?;
                report.loaded += 1;
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping customer {}: {}",
                    customer.customer_id.as_deref().unwrap_or("<missing>"),
                    e
                );
                savepoint.rollback().await?;
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

async fn insert_customer<C: ConnectionTrait>(
    db: &C,
    customer: &CustomerRecord,
) -> Result<(), Error> {
    let row = clean_customer(customer)?;
    CustomerRepository::new(db).create(row).await?;

    Ok(())
}

/// Cleans a raw customer record into an insertable row.
///
/// Fails only when the customer ID is missing or not an integer.
pub fn clean_customer(customer: &CustomerRecord) -> Result<CustomerRow, Error> {
    Ok(CustomerRow {
        customer_id: parse_natural_key("CustomerID", customer.customer_id.as_deref())?,
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        email: customer.email.clone().unwrap_or_default(),
        phone: clean_phone(customer.phone.as_deref()),
        city: customer
            .city
            .clone()
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
        country: customer
            .country
            .clone()
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
    })
}
