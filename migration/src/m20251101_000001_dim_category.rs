use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DimCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(DimCategory::Id))
                    .col(integer_uniq(DimCategory::CategoryId))
                    .col(string_uniq(DimCategory::Name))
                    .col(text(DimCategory::Description))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DimCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DimCategory {
    Table,
    Id,
    CategoryId,
    Name,
    Description,
}
