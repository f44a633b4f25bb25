pub use sea_orm_migration::prelude::*;

mod m20251101_000001_dim_category;
mod m20251101_000002_dim_customer;
mod m20251101_000003_dim_product;
mod m20251101_000004_dim_warehouse;
mod m20251101_000005_dim_date;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_dim_category::Migration),
            Box::new(m20251101_000002_dim_customer::Migration),
            Box::new(m20251101_000003_dim_product::Migration),
            Box::new(m20251101_000004_dim_warehouse::Migration),
            Box::new(m20251101_000005_dim_date::Migration),
        ]
    }
}
