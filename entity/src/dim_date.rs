use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "dim_date")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub date_key: i32,
    #[sea_orm(unique)]
    pub full_date: Date,
    pub year: i32,
    pub month: i32,
    pub month_name: String,
    pub quarter: i32,
    pub half_year: i32,
    pub day_of_month: i32,
    pub day_of_week: i32,
    pub weekday_name: String,
    pub week_of_month: i32,
    pub week_of_year: i32,
    pub is_weekend: bool,
    pub is_holiday: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
