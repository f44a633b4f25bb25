use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "dim_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub category_id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dim_product::Entity")]
    DimProduct,
}

impl Related<super::dim_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DimProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
