use std::path::Path;

use dimload::service::orchestrator::LoadPlan;
use dimload_test_utils::prelude::*;

mod run_full_load;

/// SQLite database file inside the test directory, created on first connect.
pub fn database_url(dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", dir.join("warehouse.db").display())
}

pub fn load_plan(test: &TestContext, calendar_extra_years: u32) -> LoadPlan {
    LoadPlan {
        customers_csv: test.extract_path(ExtractFile::Customers),
        products_csv: test.extract_path(ExtractFile::Products),
        orders_csv: test.extract_path(ExtractFile::Orders),
        calendar_extra_years,
    }
}
