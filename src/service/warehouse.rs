use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::warehouse::WarehouseRepository,
    error::Error,
    model::row::PLACEHOLDER_WAREHOUSE,
    service::commit_or_rollback,
};

pub struct WarehouseLoader<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarehouseLoader<'a> {
    /// Creates a new instance of [`WarehouseLoader`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the warehouse dimension with the single placeholder warehouse
    pub async fn load(&self) -> Result<u64, Error> {
        tracing::info!("Loading dim_warehouse");

        let txn = self.db.begin().await?;
        let result = replace_warehouse(&txn).await;
        let inserted = commit_or_rollback(txn, "dim_warehouse", result).await?;

        tracing::info!("dim_warehouse loaded: {} row (placeholder)", inserted);

        Ok(inserted)
    }
}

async fn replace_warehouse(txn: &DatabaseTransaction) -> Result<u64, Error> {
    let warehouse_repo = WarehouseRepository::new(txn);

    warehouse_repo.truncate().await?;
    warehouse_repo.create(&PLACEHOLDER_WAREHOUSE).await?;

    Ok(1)
}
