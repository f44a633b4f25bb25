//! `SeaORM` entities for the sales warehouse dimension tables.

pub mod prelude;

pub mod dim_category;
pub mod dim_customer;
pub mod dim_date;
pub mod dim_product;
pub mod dim_warehouse;
