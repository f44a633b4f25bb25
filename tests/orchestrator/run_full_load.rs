//! Tests for the run_full_load entry point.
//!
//! Each test runs against a fresh SQLite file so the migrations run exactly
//! as they would against a new warehouse, then reconnects to inspect the
//! tables the load left behind.

use dimload::{
    error::{extract::ExtractError, Error},
    service::orchestrator::run_full_load,
};
use dimload_test_utils::prelude::*;
use sea_orm::{Database, EntityTrait, PaginatorTrait, QueryOrder};

use super::{database_url, load_plan};

/// Tests a full load into an empty warehouse.
///
/// Verifies that the schema is created on connect and that every dimension
/// receives its rows, including products linked to their category.
///
/// Expected: Ok with every table populated
#[tokio::test]
async fn loads_new_warehouse() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customers(vec![factory::customer_row(1), factory::customer_row(2)])
        .with_products(vec![
            factory::product_row(1, Some("Tools")),
            factory::product_row(2, None),
        ])
        .with_orders(vec![
            factory::order_row(1, "2023-06-01"),
            factory::order_row(2, "2023-06-03"),
        ])
        .build()
        .await?;
    let url = database_url(test.extract_dir());

    let summary = run_full_load(&url, &load_plan(&test, 1)).await.unwrap();

    assert_eq!(summary.categories, 1);
    assert_eq!(summary.customers.loaded, 2);
    assert_eq!(summary.products.loaded, 2);
    assert_eq!(summary.warehouses, 1);
    assert_eq!(summary.calendar_days, 368);

    let db = Database::connect(url.as_str()).await?;
    assert_eq!(entity::prelude::DimCustomer::find().count(&db).await?, 2);
    assert_eq!(entity::prelude::DimDate::find().count(&db).await?, 368);
    let products = entity::prelude::DimProduct::find()
        .order_by_asc(entity::dim_product::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(products[0].category_key, Some(1));
    assert_eq!(products[1].category_key, None);

    Ok(())
}

/// Tests running the full load twice against the same warehouse.
///
/// Verifies that applied migrations are not rerun and that every table is
/// replaced rather than appended to, with surrogate keys restarting at 1.
///
/// Expected: Ok with identical summaries and no duplicated rows
#[tokio::test]
async fn rerun_replaces_tables() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customers(vec![factory::customer_row(1)])
        .with_products(vec![
            factory::product_row(1, Some("Tools")),
            factory::product_row(2, Some("Toys")),
        ])
        .with_orders(vec![factory::order_row(1, "2023-06-01")])
        .build()
        .await?;
    let url = database_url(test.extract_dir());
    let plan = load_plan(&test, 0);

    let first = run_full_load(&url, &plan).await.unwrap();
    let second = run_full_load(&url, &plan).await.unwrap();

    assert_eq!(first, second);

    let db = Database::connect(url.as_str()).await?;
    let categories = entity::prelude::DimCategory::find()
        .order_by_asc(entity::dim_category::Column::Id)
        .all(&db)
        .await?;
    let keys: Vec<i32> = categories.iter().map(|c| c.id).collect();
    assert_eq!(keys, vec![1, 2]);
    assert_eq!(entity::prelude::DimWarehouse::find().count(&db).await?, 1);
    assert_eq!(entity::prelude::DimDate::find().count(&db).await?, 1);

    Ok(())
}

/// Tests a full load whose customer extract lacks a required column.
///
/// Verifies that the error reaches the caller and that the category table,
/// loaded before customers, keeps its new contents.
///
/// Expected: Err with ExtractError::MissingColumn
#[tokio::test]
async fn propagates_extract_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_raw_extract(ExtractFile::Customers, "CustomerID,FirstName\n1,Ada\n")
        .with_products(vec![factory::product_row(1, Some("Tools"))])
        .build()
        .await?;
    let url = database_url(test.extract_dir());

    let result = run_full_load(&url, &load_plan(&test, 0)).await;

    assert!(matches!(
        result,
        Err(Error::ExtractError(ExtractError::MissingColumn { ref column, .. })) if column == "LastName"
    ));

    let db = Database::connect(url.as_str()).await?;
    assert_eq!(entity::prelude::DimCategory::find().count(&db).await?, 1);
    assert_eq!(entity::prelude::DimCustomer::find().count(&db).await?, 0);

    Ok(())
}

/// Tests a full load against a database file that cannot be opened.
///
/// Expected: Err with Error::DbErr
#[tokio::test]
async fn fails_on_unreachable_database() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let url = format!(
        "sqlite://{}?mode=ro",
        test.extract_dir().join("missing.db").display()
    );

    let result = run_full_load(&url, &load_plan(&test, 0)).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
