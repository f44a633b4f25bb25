//! Loader services.
//!
//! Each loader replaces one dimension table inside its own transaction on the
//! shared warehouse connection. Category, warehouse and calendar loads are
//! all-or-nothing. Customer and product loads insert row by row, each row in
//! its own savepoint, so a failing row is skipped without discarding the rows
//! before it.

pub mod calendar;
pub mod category;
pub mod customer;
pub mod orchestrator;
pub mod product;
pub mod warehouse;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseTransaction;

use crate::error::Error;

/// Commits `txn` when `result` is `Ok`, otherwise rolls it back and returns
/// the original error.
pub(crate) async fn commit_or_rollback<T>(
    txn: DatabaseTransaction,
    table: &str,
    result: Result<T, Error>,
) -> Result<T, Error> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            tracing::error!("Failed to load {}, rolling back: {}", table, e);

            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!("Rollback of {} failed: {}", table, rollback_err);
            }

            Err(e)
        }
    }
}

/// Parses a natural ID from the extract into an integer key.
pub(crate) fn parse_natural_key(column: &str, raw: Option<&str>) -> Result<i64, Error> {
    raw.and_then(|raw| raw.trim().parse::<i64>().ok())
        .ok_or_else(|| Error::InvalidNaturalKey {
            column: column.to_string(),
            value: raw.map(str::to_string),
        })
}
