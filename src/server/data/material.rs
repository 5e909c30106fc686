use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct MaterialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaterialRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists materials with their supplier, optionally narrowed by type
    /// and/or company, ordered by material name.
    pub async fn list(
        &self,
        material_type: Option<&str>,
        company_id: Option<i32>,
    ) -> Result<Vec<(entity::material::Model, Option<entity::company::Model>)>, DbErr> {
        let mut query = entity::prelude::Material::find()
            .find_also_related(entity::prelude::Company)
            .order_by_asc(entity::material::Column::Name);

        if let Some(material_type) = material_type {
            query = query.filter(entity::material::Column::MaterialType.eq(material_type));
        }

        if let Some(company_id) = company_id {
            query = query.filter(entity::material::Column::CompanyId.eq(company_id));
        }

        query.all(self.db).await
    }

    pub async fn get(
        &self,
        id: i32,
    ) -> Result<Option<(entity::material::Model, Option<entity::company::Model>)>, DbErr> {
        entity::prelude::Material::find_by_id(id)
            .find_also_related(entity::prelude::Company)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        name: String,
        material_type: String,
        company_id: i32,
    ) -> Result<entity::material::Model, DbErr> {
        entity::material::ActiveModel {
            name: ActiveValue::Set(name),
            material_type: ActiveValue::Set(material_type),
            company_id: ActiveValue::Set(company_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        material_type: Option<String>,
        company_id: Option<i32>,
    ) -> Result<Option<entity::material::Model>, DbErr> {
        let Some(material) = entity::prelude::Material::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut material: entity::material::ActiveModel = material.into();

        if let Some(name) = name {
            material.name = ActiveValue::Set(name);
        }
        if let Some(material_type) = material_type {
            material.material_type = ActiveValue::Set(material_type);
        }
        if let Some(company_id) = company_id {
            material.company_id = ActiveValue::Set(company_id);
        }
        material.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(material.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Material::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Material::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }
}
