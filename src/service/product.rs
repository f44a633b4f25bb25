use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{category::CategoryRepository, product::ProductRepository},
    error::{extract::ExtractError, Error},
    extract::{Extract, ProductRecord},
    model::{category::CategoryTable, row::ProductRow, summary::LoadReport},
    service::{commit_or_rollback, parse_natural_key},
    util::clean::clean_price,
};

pub struct ProductLoader<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductLoader<'a> {
    /// Creates a new instance of [`ProductLoader`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the product dimension with the cleaned product extract
    ///
    /// Each product's category is resolved through `categories`, which must be
    /// the table the category loader just persisted. Rows failing to insert are
    /// logged and skipped. A non-numeric stock value fails the whole load.
    pub async fn load(
        &self,
        products: &Extract<ProductRecord>,
        categories: &CategoryTable,
    ) -> Result<LoadReport, Error> {
        tracing::info!("Loading dim_product");

        let txn = self.db.begin().await?;
        let result = replace_products(&txn, products, categories).await;
        let report = commit_or_rollback(txn, "dim_product", result).await?;

        tracing::info!(
            "dim_product loaded: {} rows ({} skipped)",
            report.loaded,
            report.skipped
        );

        Ok(report)
    }
}

async fn replace_products(
    txn: &DatabaseTransaction,
    products: &Extract<ProductRecord>,
    categories: &CategoryTable,
) -> Result<LoadReport, Error> {
    // Stock is coerced for the whole extract before anything is deleted
    let stocks = products
        .records
        .iter()
        .enumerate()
        .map(|(index, product)| coerce_stock(products, index, product.stock.as_deref()))
        .collect::<Result<Vec<i32>, ExtractError>>()?;

    ProductRepository::new(txn).truncate().await?;

    let mut report = LoadReport::default();

    for (product, stock) in products.records.iter().zip(stocks) {
        let savepoint = txn.begin().await?;

        match insert_product(&savepoint, product, stock, categories).await {
            Ok(()) => {
                savepoint.commit().await?;
                report.loaded += 1;
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping product {}: {}",
                    product.product_id.as_deref().unwrap_or("<missing>"),
                    e
                );
                savepoint.rollback().await?;
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

async fn insert_product<C: ConnectionTrait>(
    db: &C,
    product: &ProductRecord,
    stock: i32,
    categories: &CategoryTable,
) -> Result<(), Error> {
    let row = ProductRow {
        product_id: parse_natural_key("ProductID", product.product_id.as_deref())?,
        name: product.product_name.clone(),
        price: clean_price(product.price.as_deref()),
        stock,
    };

    let category_key = resolve_category_key(db, categories, product.category.as_deref()).await?;

    ProductRepository::new(db).create(row, category_key).await?;

    Ok(())
}

/// Resolves a category name to the surrogate key of the persisted category.
///
/// The name is mapped to its natural ID in memory, then the surrogate key is
/// read back from the category table.
///
/// # Returns
/// - `Ok(Some(i32))` - Surrogate key of the product's category
/// - `Ok(None)` - The product has no category, or it is not in `categories` or the table
pub async fn resolve_category_key<C: ConnectionTrait>(
    db: &C,
    categories: &CategoryTable,
    category: Option<&str>,
) -> Result<Option<i32>, Error> {
    let Some(category_id) = category.and_then(|name| categories.category_id(name)) else {
        return Ok(None);
    };

    let category_key = CategoryRepository::new(db)
        .get_key_by_category_id(category_id)
        .await?;

    Ok(category_key)
}

/// Missing stock is 0; numeric stock is truncated to an integer and must fit
/// the stock column.
fn coerce_stock(
    products: &Extract<ProductRecord>,
    index: usize,
    raw: Option<&str>,
) -> Result<i32, ExtractError> {
    let Some(raw) = raw else {
        return Ok(0);
    };

    let stock = raw
        .parse::<f64>()
        .ok()
        .filter(|stock| stock.is_finite())
        .and_then(|stock| i32::try_from(stock.trunc() as i64).ok());

    match stock {
        Some(stock) => Ok(stock),
        None => Err(ExtractError::InvalidValue {
            path: products.path.clone(),
            row: index + 1,
            column: "Stock".to_string(),
            value: raw.to_string(),
        }),
    }
}
