use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DimCustomer::Table)
                    .if_not_exists()
                    .col(pk_auto(DimCustomer::Id))
                    .col(big_integer_uniq(DimCustomer::CustomerId))
                    .col(string_null(DimCustomer::FirstName))
                    .col(string_null(DimCustomer::LastName))
                    .col(string(DimCustomer::Email))
                    .col(string_null(DimCustomer::Phone))
                    .col(string(DimCustomer::City))
                    .col(string(DimCustomer::Country))
                    .col(string(DimCustomer::Status))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DimCustomer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DimCustomer {
    Table,
    Id,
    CustomerId,
    FirstName,
    LastName,
    Email,
    Phone,
    City,
    Country,
    Status,
}
