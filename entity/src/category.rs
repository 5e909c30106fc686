use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::furniture_model::Entity")]
    FurnitureModel,
}

impl Related<super::furniture_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FurnitureModel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
