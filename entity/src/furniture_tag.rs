use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "furniture_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub furniture_model_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::furniture_model::Entity",
        from = "Column::FurnitureModelId",
        to = "super::furniture_model::Column::Id",
        on_delete = "Cascade"
    )]
    FurnitureModel,
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id",
        on_delete = "Cascade"
    )]
    Tag,
}

impl Related<super::furniture_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FurnitureModel.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
