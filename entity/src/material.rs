use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub material_type: String,
    pub company_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
    #[sea_orm(has_many = "super::build_material::Entity")]
    BuildMaterial,
    #[sea_orm(has_many = "super::tag_material::Entity")]
    TagMaterial,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::build_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildMaterial.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_material::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_material::Relation::Material.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
