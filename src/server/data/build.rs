use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::JoinType,
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Build joined two hops up to its model's category.
#[derive(Debug, FromQueryResult)]
pub struct BuildDetailRow {
    pub id: i32,
    pub furniture_model_id: i32,
    pub reference: Option<String>,
    pub date_creation: Option<NaiveDate>,
    pub destination: Option<String>,
    pub notes: Option<String>,
    pub model_name: String,
    pub category_id: i32,
    pub category_name: String,
}

pub struct BuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Most recent fabrications first; ties on the (nullable) creation
    /// date fall back to insertion order.
    pub async fn list(
        &self,
        furniture_model_id: Option<i32>,
    ) -> Result<Vec<(entity::build::Model, Option<entity::furniture_model::Model>)>, DbErr> {
        let mut query = entity::prelude::Build::find()
            .find_also_related(entity::prelude::FurnitureModel)
            .order_by_desc(entity::build::Column::DateCreation)
            .order_by_desc(entity::build::Column::Id);

        if let Some(furniture_model_id) = furniture_model_id {
            query =
                query.filter(entity::build::Column::FurnitureModelId.eq(furniture_model_id));
        }

        query.all(self.db).await
    }

    pub async fn get_detail(&self, id: i32) -> Result<Option<BuildDetailRow>, DbErr> {
        entity::prelude::Build::find_by_id(id)
            .select_only()
            .columns([
                entity::build::Column::Id,
                entity::build::Column::FurnitureModelId,
                entity::build::Column::DateCreation,
                entity::build::Column::Destination,
                entity::build::Column::Notes,
            ])
            .column_as(entity::build::Column::Reference, "reference")
            .column_as(entity::furniture_model::Column::Name, "model_name")
            .column_as(entity::category::Column::Id, "category_id")
            .column_as(entity::category::Column::Name, "category_name")
            .join(
                JoinType::InnerJoin,
                entity::build::Relation::FurnitureModel.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::furniture_model::Relation::Category.def(),
            )
            .into_model::<BuildDetailRow>()
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        furniture_model_id: i32,
        reference: Option<String>,
        date_creation: Option<NaiveDate>,
        destination: Option<String>,
        notes: Option<String>,
    ) -> Result<entity::build::Model, DbErr> {
        entity::build::ActiveModel {
            furniture_model_id: ActiveValue::Set(furniture_model_id),
            reference: ActiveValue::Set(reference),
            date_creation: ActiveValue::Set(date_creation),
            destination: ActiveValue::Set(destination),
            notes: ActiveValue::Set(notes),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Partial update; nullable fields use the double-`Option` pattern
    /// to distinguish "absent" from "set to null".
    #[allow(clippy::type_complexity)]
    pub async fn update(
        &self,
        id: i32,
        furniture_model_id: Option<i32>,
        reference: Option<Option<String>>,
        date_creation: Option<Option<NaiveDate>>,
        destination: Option<Option<String>>,
        notes: Option<Option<String>>,
    ) -> Result<Option<entity::build::Model>, DbErr> {
        let Some(build) = entity::prelude::Build::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut build: entity::build::ActiveModel = build.into();

        if let Some(furniture_model_id) = furniture_model_id {
            build.furniture_model_id = ActiveValue::Set(furniture_model_id);
        }
        if let Some(reference) = reference {
            build.reference = ActiveValue::Set(reference);
        }
        if let Some(date_creation) = date_creation {
            build.date_creation = ActiveValue::Set(date_creation);
        }
        if let Some(destination) = destination {
            build.destination = ActiveValue::Set(destination);
        }
        if let Some(notes) = notes {
            build.notes = ActiveValue::Set(notes);
        }
        build.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(build.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Build::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Build::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use atelier_test_utils::prelude::*;

    use super::BuildRepository;

    #[tokio::test]
    async fn test_get_detail_joins_model_and_category() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = BuildRepository::new(&test.db);

        let category = fixtures::seed_category(&test.db, "Table").await?;
        let model = fixtures::seed_furniture_model(&test.db, "Classic Table", category.id).await?;
        let build = fixtures::seed_build(&test.db, model.id).await?;

        let detail = repository.get_detail(build.id).await?.unwrap();

        assert_eq!(detail.model_name, "Classic Table");
        assert_eq!(detail.category_id, category.id);
        assert_eq!(detail.category_name, "Table");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_detail_missing_build_returns_none() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = BuildRepository::new(&test.db);

        assert!(repository.get_detail(42).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_list_filters_by_model() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = BuildRepository::new(&test.db);

        let category = fixtures::seed_category(&test.db, "Table").await?;
        let classic = fixtures::seed_furniture_model(&test.db, "Classic Table", category.id).await?;
        let modern = fixtures::seed_furniture_model(&test.db, "Modern Table", category.id).await?;

        fixtures::seed_build(&test.db, classic.id).await?;
        fixtures::seed_build(&test.db, classic.id).await?;
        fixtures::seed_build(&test.db, modern.id).await?;

        let all = repository.list(None).await?;
        let classic_only = repository.list(Some(classic.id)).await?;

        assert_eq!(all.len(), 3);
        assert_eq!(classic_only.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_cascades_into_detail_lookup() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = BuildRepository::new(&test.db);

        let category = fixtures::seed_category(&test.db, "Table").await?;
        let model = fixtures::seed_furniture_model(&test.db, "Classic Table", category.id).await?;
        let build = fixtures::seed_build(&test.db, model.id).await?;

        assert!(repository.delete(build.id).await?);
        assert!(repository.get_detail(build.id).await?.is_none());

        Ok(())
    }
}
