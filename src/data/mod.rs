//! Data access layer repositories.
//!
//! One repository per dimension table. Repositories are generic over
//! [`ConnectionTrait`] so loaders can run them inside a transaction or a
//! per-row savepoint.

pub mod category;
pub mod customer;
pub mod date;
pub mod product;
pub mod warehouse;

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DbBackend, DbErr, EntityName, EntityTrait};

/// Rows per multi-row `INSERT`.
pub(crate) const BATCH_SIZE: usize = 100;

/// Restarts the auto-increment sequence behind an entity's `id` column so the
/// next inserted row gets surrogate key 1.
///
/// Call on an empty table only; existing rows would collide with reused keys.
pub(crate) async fn reset_key_sequence<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let sql = key_reset_sql(db.get_database_backend(), entity.table_name())?;

    db.execute_unprepared(&sql).await?;

    Ok(())
}

/// Statement restarting the `id` sequence of `table` on `backend`.
///
/// Only backends whose reset stays inside the loader's transaction are
/// supported; MySQL's `ALTER TABLE` would commit it implicitly.
fn key_reset_sql(backend: DbBackend, table: &str) -> Result<String, DbErr> {
    match backend {
        DbBackend::Postgres => Ok(format!(
            "SELECT setval(pg_get_serial_sequence('{}', 'id'), 1, false)",
            table
        )),
        DbBackend::Sqlite => Ok(format!(
            "DELETE FROM sqlite_sequence WHERE name = '{}'",
            table
        )),
        other => Err(DbErr::Custom(format!(
            "Resetting the key sequence of {} is not supported on {:?}",
            table, other
        ))),
    }
}

