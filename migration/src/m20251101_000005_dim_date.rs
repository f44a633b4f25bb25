use sea_orm_migration::{prelude::*, schema::*};

static IDX_DIM_DATE_YEAR_MONTH: &str = "idx_dim_date_year_month";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DimDate::Table)
                    .if_not_exists()
                    .col(integer(DimDate::DateKey).primary_key())
                    .col(date_uniq(DimDate::FullDate))
                    .col(integer(DimDate::Year))
                    .col(integer(DimDate::Month))
                    .col(string(DimDate::MonthName))
                    .col(integer(DimDate::Quarter))
                    .col(integer(DimDate::HalfYear))
                    .col(integer(DimDate::DayOfMonth))
                    .col(integer(DimDate::DayOfWeek))
                    .col(string(DimDate::WeekdayName))
                    .col(integer(DimDate::WeekOfMonth))
                    .col(integer(DimDate::WeekOfYear))
                    .col(boolean(DimDate::IsWeekend))
                    .col(boolean(DimDate::IsHoliday))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIM_DATE_YEAR_MONTH)
                    .table(DimDate::Table)
                    .col(DimDate::Year)
                    .col(DimDate::Month)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIM_DATE_YEAR_MONTH)
                    .table(DimDate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DimDate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DimDate {
    Table,
    DateKey,
    FullDate,
    Year,
    Month,
    MonthName,
    Quarter,
    HalfYear,
    DayOfMonth,
    DayOfWeek,
    WeekdayName,
    WeekOfMonth,
    WeekOfYear,
    IsWeekend,
    IsHoliday,
}
