use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::category::CategoryRepository,
    error::Error,
    extract::{Extract, ProductRecord},
    model::category::CategoryTable,
    service::commit_or_rollback,
};

pub struct CategoryLoader<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryLoader<'a> {
    /// Creates a new instance of [`CategoryLoader`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the category dimension with the distinct categories of the product extract
    ///
    /// Categories get natural IDs 1..N in first-observed order. The whole table
    /// is rolled back if any insert fails.
    ///
    /// # Returns
    /// - `Ok(CategoryTable)` - The categories written, for the product loader's lookups
    /// - `Err(Error)` - The load failed and the previous contents were kept
    pub async fn load(&self, products: &Extract<ProductRecord>) -> Result<CategoryTable, Error> {
        tracing::info!("Loading dim_category");

        let categories = CategoryTable::from_names(
            products
                .records
                .iter()
                .filter_map(|product| product.category.as_deref()),
        );

        let txn = self.db.begin().await?;
        let result = replace_categories(&txn, &categories).await;
        let inserted = commit_or_rollback(txn, "dim_category", result).await?;

        tracing::info!("dim_category loaded: {} rows", inserted);

        Ok(categories)
    }
}

async fn replace_categories(
    txn: &DatabaseTransaction,
    categories: &CategoryTable,
) -> Result<u64, Error> {
    let category_repo = CategoryRepository::new(txn);

    category_repo.truncate().await?;
    let inserted = category_repo.create_many(categories.entries()).await?;

    Ok(inserted)
}
