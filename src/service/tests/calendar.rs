use chrono::NaiveDate;

use crate::service::calendar::CalendarLoader;

use super::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Expect one row per day from the first order date to the last plus the extra years
#[tokio::test]
async fn loads_order_date_range() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dimension_tables()
        .with_orders(vec![
            factory::order_row(1, "2023-06-03"),
            factory::order_row(2, "2023-06-01"),
            factory::order_row(3, "06/02/2023"),
        ])
        .build()
        .await?;
    let orders = read_orders(&test.extract_path(ExtractFile::Orders)).unwrap();

    let inserted = CalendarLoader::new(&test.db)
        .load_as_of(&orders, 1, date(2030, 1, 1))
        .await
        .unwrap();

    assert_eq!(inserted, 368);
    let days = entity::prelude::DimDate::find()
        .order_by_asc(entity::dim_date::Column::DateKey)
        .all(&test.db)
        .await?;
    assert_eq!(days.len(), 368);
    assert_eq!(days[0].date_key, 20230601);
    assert_eq!(days[367].full_date, date(2024, 6, 2));
    assert!(days.iter().all(|d| d.is_weekend == (d.day_of_week >= 6)));
    assert_eq!(days.iter().filter(|d| d.is_weekend).count(), 106);

    Ok(())
}

/// Expect calendar attributes derived for each day
#[tokio::test]
async fn derives_calendar_attributes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dimension_tables()
        .with_orders(vec![factory::order_row(1, "2023-06-03")])
        .build()
        .await?;
    let orders = read_orders(&test.extract_path(ExtractFile::Orders)).unwrap();

    CalendarLoader::new(&test.db)
        .load_as_of(&orders, 0, date(2030, 1, 1))
        .await
        .unwrap();

    let day = entity::prelude::DimDate::find_by_id(20230603)
        .one(&test.db)
        .await?
        .expect("2023-06-03 should be stored");
    assert_eq!(day.month_name, "June");
    assert_eq!(day.quarter, 2);
    assert_eq!(day.half_year, 1);
    assert_eq!(day.weekday_name, "Saturday");
    assert_eq!(day.day_of_week, 6);
    assert!(day.is_weekend);
    assert!(!day.is_holiday);

    Ok(())
}

/// Expect out-of-range order years ignored instead of stretching the calendar
#[tokio::test]
async fn ignores_out_of_range_years() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dimension_tables()
        .with_orders(vec![
            factory::order_row(1, "+250000-01-01"),
            factory::order_row(2, "2023-06-01"),
            factory::order_row(3, "0001-01-01"),
            factory::order_row(4, "2023-06-03"),
        ])
        .build()
        .await?;
    let orders = read_orders(&test.extract_path(ExtractFile::Orders)).unwrap();

    let inserted = CalendarLoader::new(&test.db)
        .load_as_of(&orders, 0, date(2030, 1, 1))
        .await
        .unwrap();

    assert_eq!(inserted, 3);

    Ok(())
}

/// Expect the default range when no order date parses
#[tokio::test]
async fn falls_back_to_default_range() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dimension_tables()
        .with_orders(vec![
            factory::order_row(1, "#N/A"),
            factory::order_row(2, "not a date"),
        ])
        .build()
        .await?;
    let orders = read_orders(&test.extract_path(ExtractFile::Orders)).unwrap();
    let today = date(2020, 1, 10);

    let inserted = CalendarLoader::new(&test.db)
        .load_as_of(&orders, 2, today)
        .await
        .unwrap();

    // 2020-01-01 through 2021-01-09
    assert_eq!(inserted, 375);
    let last = entity::prelude::DimDate::find()
        .order_by_desc(entity::dim_date::Column::DateKey)
        .one(&test.db)
        .await?
        .expect("calendar should not be empty");
    assert_eq!(last.full_date, date(2021, 1, 9));

    Ok(())
}

/// Expect the previous calendar replaced on reload
#[tokio::test]
async fn replaces_calendar_on_reload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dimension_tables()
        .with_orders(vec![factory::order_row(1, "2023-06-01")])
        .build()
        .await?;
    let orders = read_orders(&test.extract_path(ExtractFile::Orders)).unwrap();

    let calendar_loader = CalendarLoader::new(&test.db);
    calendar_loader
        .load_as_of(&orders, 0, date(2030, 1, 1))
        .await
        .unwrap();
    let inserted = calendar_loader
        .load_as_of(&orders, 0, date(2030, 1, 1))
        .await
        .unwrap();

    assert_eq!(inserted, 1);
    assert_eq!(entity::prelude::DimDate::find().count(&test.db).await?, 1);

    Ok(())
}
