use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "builds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub furniture_model_id: i32,
    #[sea_orm(column_name = "ref", nullable)]
    pub reference: Option<String>,
    pub date_creation: Option<Date>,
    pub destination: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
    #[sea_orm(has_many = "super::build_material::Entity")]
    BuildMaterial,
}

impl Related<super::furniture_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FurnitureModel.def()
    }
}

impl Related<super::build_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildMaterial.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
