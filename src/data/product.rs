use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::{
    data::reset_key_sequence,
    model::row::{ProductRow, ACTIVE_STATUS},
};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Deletes every product and restarts surrogate keys at 1
    pub async fn truncate(&self) -> Result<u64, DbErr> {
        let deleted = entity::prelude::DimProduct::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;

        reset_key_sequence(self.db, entity::prelude::DimProduct).await?;

        Ok(deleted)
    }

    /// Inserts a single cleaned product as an active product
    ///
    /// # Arguments
    /// - `product`: The cleaned product row
    /// - `category_key`: Surrogate key of the product's category, `None` if it has none
    pub async fn create(
        &self,
        product: ProductRow,
        category_key: Option<i32>,
    ) -> Result<entity::dim_product::Model, DbErr> {
        let product = entity::dim_product::ActiveModel {
            product_id: ActiveValue::Set(product.product_id),
            category_key: ActiveValue::Set(category_key),
            name: ActiveValue::Set(product.name),
            price: ActiveValue::Set(product.price),
            stock: ActiveValue::Set(product.stock),
            status: ActiveValue::Set(ACTIVE_STATUS.to_string()),
            ..Default::default()
        };

        product.insert(self.db).await
    }
}
