//! Declarative test builder.
//!
//! Tables and extract contents are queued on the builder and created during
//! the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError, fixtures::extract::ExtractFile};

/// Builder for declarative test initialization.
///
/// Extract files that are not configured are written with their standard
/// header and no rows, so every [`ExtractFile`] path exists after `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_dimension_tables: bool,

    customers: Vec<String>,
    products: Vec<String>,
    orders: Vec<String>,
    raw_extracts: Vec<(ExtractFile, String)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables and empty extracts.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_dimension_tables: false,
            customers: Vec::new(),
            products: Vec::new(),
            orders: Vec::new(),
            raw_extracts: Vec::new(),
        }
    }

    /// Add all five dimension tables to the test database.
    pub fn with_dimension_tables(mut self) -> Self {
        self.include_dimension_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dimload_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), dimload_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(DimCategory)
    ///     .with_table(DimProduct)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Append data rows to the customer extract.
    pub fn with_customers(mut self, rows: Vec<String>) -> Self {
        self.customers.extend(rows);
        self
    }

    /// Append data rows to the product extract.
    pub fn with_products(mut self, rows: Vec<String>) -> Self {
        self.products.extend(rows);
        self
    }

    /// Append data rows to the order extract.
    pub fn with_orders(mut self, rows: Vec<String>) -> Self {
        self.orders.extend(rows);
        self
    }

    /// Replace an extract with verbatim content, header included.
    ///
    /// Takes precedence over rows queued for the same file.
    pub fn with_raw_extract(mut self, file: ExtractFile, content: &str) -> Self {
        self.raw_extracts.push((file, content.to_string()));
        self
    }

    /// Build the test context: create tables, then write extract files.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_dimension_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::DimCategory),
                schema.create_table_from_entity(entity::prelude::DimCustomer),
                schema.create_table_from_entity(entity::prelude::DimProduct),
                schema.create_table_from_entity(entity::prelude::DimWarehouse),
                schema.create_table_from_entity(entity::prelude::DimDate),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        context.write_rows(ExtractFile::Customers, &self.customers)?;
        context.write_rows(ExtractFile::Products, &self.products)?;
        context.write_rows(ExtractFile::Orders, &self.orders)?;

        for (file, content) in self.raw_extracts {
            context.write_extract(file, &content)?;
        }

        Ok(context)
    }
}
