use dimload_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
