use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::{
    data::reset_key_sequence,
    model::row::{CustomerRow, ACTIVE_STATUS},
};

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Deletes every customer and restarts surrogate keys at 1
    pub async fn truncate(&self) -> Result<u64, DbErr> {
        let deleted = entity::prelude::DimCustomer::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;

        reset_key_sequence(self.db, entity::prelude::DimCustomer).await?;

        Ok(deleted)
    }

    /// Inserts a single cleaned customer as an active customer
    pub async fn create(&self, customer: CustomerRow) -> Result<entity::dim_customer::Model, DbErr> {
        let customer = entity::dim_customer::ActiveModel {
            customer_id: ActiveValue::Set(customer.customer_id),
            first_name: ActiveValue::Set(customer.first_name),
            last_name: ActiveValue::Set(customer.last_name),
            email: ActiveValue::Set(customer.email),
            phone: ActiveValue::Set(customer.phone),
            city: ActiveValue::Set(customer.city),
            country: ActiveValue::Set(customer.country),
            status: ActiveValue::Set(ACTIVE_STATUS.to_string()),
            ..Default::default()
        };

        customer.insert(self.db).await
    }
}
