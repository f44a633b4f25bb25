use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DimWarehouse::Table)
                    .if_not_exists()
                    .col(pk_auto(DimWarehouse::Id))
                    .col(integer_uniq(DimWarehouse::WarehouseId))
                    .col(string(DimWarehouse::Name))
                    .col(string(DimWarehouse::City))
                    .col(string(DimWarehouse::Country))
                    .col(string(DimWarehouse::Status))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DimWarehouse::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DimWarehouse {
    Table,
    Id,
    WarehouseId,
    Name,
    City,
    Country,
    Status,
}
