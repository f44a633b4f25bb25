use dimload_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

use crate::{
    error::Error,
    extract::{customer::read_customers, order::read_orders, product::read_products},
};

mod calendar;
mod customer;
