use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::date::DateRepository,
    error::Error,
    extract::{Extract, OrderRecord},
    model::calendar::CalendarDay,
    service::commit_or_rollback,
    util::{calendar::calendar_range, clean::clean_date},
};

pub struct CalendarLoader<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarLoader<'a> {
    /// Creates a new instance of [`CalendarLoader`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the date dimension with one row per day of the order date range
    ///
    /// See [`CalendarLoader::load_as_of`]; the default range is anchored on
    /// today's UTC date.
    pub async fn load(&self, orders: &Extract<OrderRecord>, extra_years: u32) -> Result<u64, Error> {
        self.load_as_of(orders, extra_years, Utc::now().date_naive())
            .await
    }

    /// Replaces the date dimension with one row per day of the order date range
    ///
    /// The range runs from the earliest valid order date to the latest plus
    /// `extra_years` years of 365 days. Without any valid order date it runs
    /// from 2020-01-01 to `today` + 365 days.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of calendar days written
    /// - `Err(Error)` - The load failed and the previous contents were kept
    pub async fn load_as_of(
        &self,
        orders: &Extract<OrderRecord>,
        extra_years: u32,
        today: NaiveDate,
    ) -> Result<u64, Error> {
        tracing::info!("Loading dim_date");

        let order_dates: Vec<NaiveDate> = orders
            .records
            .iter()
            .filter_map(|order| clean_date(order.order_date.as_deref()))
            .collect();

        let range = calendar_range(&order_dates, extra_years, today)?;

        if range.is_default {
            tracing::warn!(
                "No valid order dates found, using default calendar range {} to {} ({} days)",
                range.start,
                range.end,
                range.len()
            );
        } else {
            tracing::debug!(
                "{} of {} order dates valid, calendar range {} to {} ({} days)",
                order_dates.len(),
                orders.len(),
                range.start,
                range.end,
                range.len()
            );
        }

        let days = range.days();

        let txn = self.db.begin().await?;
        let result = replace_dates(&txn, &days).await;
        let inserted = commit_or_rollback(txn, "dim_date", result).await?;

        tracing::info!("dim_date loaded: {} rows", inserted);

        Ok(inserted)
    }
}

async fn replace_dates(txn: &DatabaseTransaction, days: &[CalendarDay]) -> Result<u64, Error> {
    let date_repo = DateRepository::new(txn);

    date_repo.clear().await?;
    let inserted = date_repo.create_many(days).await?;

    Ok(inserted)
}
