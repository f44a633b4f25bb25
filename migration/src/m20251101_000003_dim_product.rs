use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_dim_category::DimCategory;

static IDX_DIM_PRODUCT_CATEGORY_KEY: &str = "idx_dim_product_category_key";
static FK_DIM_PRODUCT_CATEGORY_KEY: &str = "fk_dim_product_category_key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DimProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(DimProduct::Id))
                    .col(big_integer_uniq(DimProduct::ProductId))
                    .col(integer_null(DimProduct::CategoryKey))
                    .col(string_null(DimProduct::Name))
                    .col(double(DimProduct::Price))
                    .col(integer(DimProduct::Stock))
                    .col(string(DimProduct::Status))
                    // Inline so SQLite, which cannot add constraints later, gets it too
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DIM_PRODUCT_CATEGORY_KEY)
                            .from(DimProduct::Table, DimProduct::CategoryKey)
                            .to(DimCategory::Table, DimCategory::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIM_PRODUCT_CATEGORY_KEY)
                    .table(DimProduct::Table)
                    .col(DimProduct::CategoryKey)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIM_PRODUCT_CATEGORY_KEY)
                    .table(DimProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DimProduct::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DimProduct {
    Table,
    Id,
    ProductId,
    CategoryKey,
    Name,
    Price,
    Stock,
    Status,
}
