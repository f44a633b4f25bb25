use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use crate::{
    data::{reset_key_sequence, BATCH_SIZE},
    model::category::CategoryEntry,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Deletes every category and restarts surrogate keys at 1
    ///
    /// Products referencing a deleted category have their key set to null by
    /// the foreign key.
    pub async fn truncate(&self) -> Result<u64, DbErr> {
        let deleted = entity::prelude::DimCategory::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;

        reset_key_sequence(self.db, entity::prelude::DimCategory).await?;

        Ok(deleted)
    }

    /// Inserts categories in batches, returning the number of rows written
    pub async fn create_many(&self, categories: &[CategoryEntry]) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for batch in categories.chunks(BATCH_SIZE) {
            let models = batch.iter().map(|c| entity::dim_category::ActiveModel {
                category_id: ActiveValue::Set(c.category_id),
                name: ActiveValue::Set(c.name.clone()),
                description: ActiveValue::Set(c.description.clone()),
                ..Default::default()
            });

            inserted += entity::prelude::DimCategory::insert_many(models)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    /// Gets the surrogate key of a persisted category using its natural category ID
    pub async fn get_key_by_category_id(&self, category_id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::DimCategory::find()
            .select_only()
            .column(entity::dim_category::Column::Id)
            .filter(entity::dim_category::Column::CategoryId.eq(category_id))
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }
}
