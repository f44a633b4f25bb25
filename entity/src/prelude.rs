pub use super::dim_category::Entity as DimCategory;
pub use super::dim_customer::Entity as DimCustomer;
pub use super::dim_date::Entity as DimDate;
pub use super::dim_product::Entity as DimProduct;
pub use super::dim_warehouse::Entity as DimWarehouse;
