use crate::{
    model::summary::LoadReport,
    service::customer::{clean_customer, CustomerLoader},
};

use super::*;

/// Expect every customer stored with a cleaned phone number
#[tokio::test]
async fn loads_customers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dimension_tables()
        .with_customers(vec![factory::customer_row(7), factory::customer_row(8)])
        .build()
        .await?;
    let customers = read_customers(&test.extract_path(ExtractFile::Customers)).unwrap();

    let report = CustomerLoader::new(&test.db).load(&customers).await.unwrap();

    assert_eq!(
        report,
        LoadReport {
            loaded: 2,
            skipped: 0
        }
    );
    let rows = entity::prelude::DimCustomer::find()
        .order_by_asc(entity::dim_customer::Column::Id)
        .all(&test.db)
        .await?;
    assert_eq!(rows[0].customer_id, 7);
    assert_eq!(rows[0].phone.as_deref(), Some("+15550100007"));
    assert_eq!(rows[0].email, "customer7@example.com");
    assert_eq!(rows[0].status, "Active");

    Ok(())
}

/// Expect missing location defaulted to Unknown and missing email stored empty
#[tokio::test]
async fn defaults_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dimension_tables()
        .with_customers(vec![factory::sparse_customer_row(1)])
        .build()
        .await?;
    let customers = read_customers(&test.extract_path(ExtractFile::Customers)).unwrap();

    CustomerLoader::new(&test.db).load(&customers).await.unwrap();

    let customer = entity::prelude::DimCustomer::find()
        .one(&test.db)
        .await?
        .expect("customer should be stored");
    assert_eq!(customer.email, "");
    assert_eq!(customer.phone, None);
    assert_eq!(customer.city, "Unknown");
    assert_eq!(customer.country, "Unknown");

    Ok(())
}

/// Expect a duplicate customer ID skipped without losing the other rows
#[tokio::test]
async fn skips_duplicate_customer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dimension_tables()
        .with_customers(vec![
            factory::customer_row(1),
            factory::customer_row(1),
            factory::customer_row(2),
        ])
        .build()
        .await?;
    let customers = read_customers(&test.extract_path(ExtractFile::Customers)).unwrap();

    let report = CustomerLoader::new(&test.db).load(&customers).await.unwrap();

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(
        entity::prelude::DimCustomer::find().count(&test.db).await?,
        2
    );

    Ok(())
}

/// Expect a non-integer customer ID skipped as a row-level failure
#[tokio::test]
async fn skips_invalid_customer_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dimension_tables()
        .with_customers(vec![
            "abc,Ada,Lovelace,,,,".to_string(),
            factory::customer_row(2),
        ])
        .build()
        .await?;
    let customers = read_customers(&test.extract_path(ExtractFile::Customers)).unwrap();

    let report = CustomerLoader::new(&test.db).load(&customers).await.unwrap();

    assert_eq!(report.loaded, 1);
    assert_eq!(report.skipped, 1);

    Ok(())
}

/// Expect the previous customers replaced on reload
#[tokio::test]
async fn replaces_customers_on_reload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dimension_tables()
        .with_customers(vec![factory::customer_row(1), factory::customer_row(2)])
        .build()
        .await?;
    let customers = read_customers(&test.extract_path(ExtractFile::Customers)).unwrap();

    let customer_loader = CustomerLoader::new(&test.db);
    customer_loader.load(&customers).await.unwrap();
    let report = customer_loader.load(&customers).await.unwrap();

    assert_eq!(report.skipped, 0);
    let keys: Vec<i32> = entity::prelude::DimCustomer::find()
        .order_by_asc(entity::dim_customer::Column::Id)
        .all(&test.db)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(keys, vec![1, 2]);

    Ok(())
}

/// Expect Error due to the customer table not being created
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customers(vec![factory::customer_row(1)])
        .build()
        .await?;
    let customers = read_customers(&test.extract_path(ExtractFile::Customers)).unwrap();

    let result = CustomerLoader::new(&test.db).load(&customers).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}

#[test]
fn clean_customer_rejects_missing_id() {
    let record = crate::extract::CustomerRecord {
        customer_id: None,
        first_name: None,
        last_name: None,
        email: None,
        phone: None,
        city: None,
        country: None,
    };

    let result = clean_customer(&record);

    assert!(matches!(
        result,
        Err(Error::InvalidNaturalKey { ref column, value: None }) if column == "CustomerID"
    ));
}
