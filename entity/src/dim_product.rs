use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dim_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub product_id: i64,
    pub category_key: Option<i32>,
    pub name: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub stock: i32,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dim_category::Entity",
        from = "Column::CategoryKey",
        to = "super::dim_category::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    DimCategory,
}

impl Related<super::dim_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DimCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
