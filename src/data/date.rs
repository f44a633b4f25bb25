use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::{data::BATCH_SIZE, model::calendar::CalendarDay};

pub struct DateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DateRepository<'a, C> {
    /// Creates a new instance of [`DateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Deletes every date row
    ///
    /// There is no sequence to reset, the date key is derived from the date.
    pub async fn clear(&self) -> Result<u64, DbErr> {
        Ok(entity::prelude::DimDate::delete_many()
            .exec(self.db)
            .await?
            .rows_affected)
    }

    /// Inserts calendar days in batches, returning the number of rows written
    pub async fn create_many(&self, days: &[CalendarDay]) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for batch in days.chunks(BATCH_SIZE) {
            let models = batch.iter().map(|d| entity::dim_date::ActiveModel {
                date_key: ActiveValue::Set(d.date_key),
                full_date: ActiveValue::Set(d.full_date),
                year: ActiveValue::Set(d.year),
                month: ActiveValue::Set(d.month),
                month_name: ActiveValue::Set(d.month_name.clone()),
                quarter: ActiveValue::Set(d.quarter),
                half_year: ActiveValue::Set(d.half_year),
                day_of_month: ActiveValue::Set(d.day_of_month),
                day_of_week: ActiveValue::Set(d.day_of_week),
                weekday_name: ActiveValue::Set(d.weekday_name.clone()),
                week_of_month: ActiveValue::Set(d.week_of_month),
                week_of_year: ActiveValue::Set(d.week_of_year),
                is_weekend: ActiveValue::Set(d.is_weekend),
                is_holiday: ActiveValue::Set(d.is_holiday),
            });

            inserted += entity::prelude::DimDate::insert_many(models)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }
}
