use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::{
    data::reset_key_sequence,
    model::row::{WarehouseRow, ACTIVE_STATUS},
};

pub struct WarehouseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WarehouseRepository<'a, C> {
    /// Creates a new instance of [`WarehouseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Deletes every warehouse and restarts surrogate keys at 1
    pub async fn truncate(&self) -> Result<u64, DbErr> {
        let deleted = entity::prelude::DimWarehouse::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;

        reset_key_sequence(self.db, entity::prelude::DimWarehouse).await?;

        Ok(deleted)
    }

    pub async fn create(
        &self,
        warehouse: &WarehouseRow,
    ) -> Result<entity::dim_warehouse::Model, DbErr> {
        let warehouse = entity::dim_warehouse::ActiveModel {
            warehouse_id: ActiveValue::Set(warehouse.warehouse_id),
            name: ActiveValue::Set(warehouse.name.to_string()),
            city: ActiveValue::Set(warehouse.city.to_string()),
            country: ActiveValue::Set(warehouse.country.to_string()),
            status: ActiveValue::Set(ACTIVE_STATUS.to_string()),
            ..Default::default()
        };

        warehouse.insert(self.db).await
    }
}
