use chrono::Utc;
use sea_orm::{
    sea_query::JoinType,
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryOrder, QuerySelect, RelationTrait,
};

/// Furniture model list row with its category and the derived number of
/// builds.
#[derive(Debug, FromQueryResult)]
pub struct FurnitureModelListRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub category_name: String,
    pub builds_count: i64,
}

pub struct FurnitureModelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FurnitureModelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<FurnitureModelListRow>, DbErr> {
        entity::prelude::FurnitureModel::find()
            .select_only()
            .columns([
                entity::furniture_model::Column::Id,
                entity::furniture_model::Column::Name,
                entity::furniture_model::Column::Description,
                entity::furniture_model::Column::CategoryId,
            ])
            .column_as(entity::category::Column::Name, "category_name")
            .column_as(entity::build::Column::Id.count(), "builds_count")
            .join(
                JoinType::InnerJoin,
                entity::furniture_model::Relation::Category.def(),
            )
            .join(
                JoinType::LeftJoin,
                entity::furniture_model::Relation::Build.def(),
            )
            .group_by(entity::furniture_model::Column::Id)
            .group_by(entity::furniture_model::Column::Name)
            .group_by(entity::furniture_model::Column::Description)
            .group_by(entity::furniture_model::Column::CategoryId)
            .group_by(entity::category::Column::Name)
            .order_by_asc(entity::furniture_model::Column::Name)
            .into_model::<FurnitureModelListRow>()
            .all(self.db)
            .await
    }

    pub async fn get(
        &self,
        id: i32,
    ) -> Result<Option<(entity::furniture_model::Model, Option<entity::category::Model>)>, DbErr>
    {
        entity::prelude::FurnitureModel::find_by_id(id)
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
        category_id: i32,
    ) -> Result<entity::furniture_model::Model, DbErr> {
        entity::furniture_model::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            category_id: ActiveValue::Set(category_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Partial update; `description` distinguishes "absent" from
    /// "set to null" because the column is nullable.
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        description: Option<Option<String>>,
        category_id: Option<i32>,
    ) -> Result<Option<entity::furniture_model::Model>, DbErr> {
        let Some(model) = entity::prelude::FurnitureModel::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut model: entity::furniture_model::ActiveModel = model.into();

        if let Some(name) = name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = description {
            model.description = ActiveValue::Set(description);
        }
        if let Some(category_id) = category_id {
            model.category_id = ActiveValue::Set(category_id);
        }
        model.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FurnitureModel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::FurnitureModel::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }
}
