use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub label: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::furniture_tag::Entity")]
    FurnitureTag,
    #[sea_orm(has_many = "super::tag_material::Entity")]
    TagMaterial,
}

impl Related<super::furniture_model::Entity> for Entity {
    fn to() -> RelationDef {
        super::furniture_tag::Relation::FurnitureModel.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::furniture_tag::Relation::Tag.def().rev())
    }
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_material::Relation::Material.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_material::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
