use chrono::Utc;
use sea_orm::{
    sea_query::JoinType,
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Furniture model listed under a tag, with its category name.
#[derive(Debug, FromQueryResult)]
pub struct TagModelRow {
    pub id: i32,
    pub name: String,
    pub category: String,
}

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Label)
            .all(self.db)
            .await
    }

    pub async fn create(&self, label: String) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            label: ActiveValue::Set(label),
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
        label: String,
    ) -> Result<Option<entity::tag::Model>, DbErr> {
        let Some(tag) = entity::prelude::Tag::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut tag: entity::tag::ActiveModel = tag.into();
        tag.label = ActiveValue::Set(label);
        tag.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(tag.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Tag::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Models carrying the tag, with their category name.
    pub async fn models_for_tag(&self, tag_id: i32) -> Result<Vec<TagModelRow>, DbErr> {
        entity::prelude::FurnitureModel::find()
            .select_only()
            .columns([
                entity::furniture_model::Column::Id,
                entity::furniture_model::Column::Name,
            ])
            .column_as(entity::category::Column::Name, "category")
            .join(
                JoinType::InnerJoin,
                entity::furniture_model::Relation::Category.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::furniture_model::Relation::FurnitureTag.def(),
            )
            .filter(entity::furniture_tag::Column::TagId.eq(tag_id))
            .order_by_asc(entity::furniture_model::Column::Name)
            .into_model::<TagModelRow>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use atelier_test_utils::prelude::*;
    use sea_orm::{ActiveValue, EntityTrait};

    use super::TagRepository;

    #[tokio::test]
    async fn test_create_rejects_duplicate_label() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = TagRepository::new(&test.db);

        repository.create("rustique".to_string()).await?;
        let duplicate = repository.create("rustique".to_string()).await;

        assert!(duplicate.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_models_for_tag_joins_category() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = TagRepository::new(&test.db);

        let category = fixtures::seed_category(&test.db, "Table").await?;
        let model = fixtures::seed_furniture_model(&test.db, "Classic Table", category.id).await?;
        let tag = fixtures::seed_tag(&test.db, "rustique").await?;

        entity::prelude::FurnitureTag::insert(entity::furniture_tag::ActiveModel {
            furniture_model_id: ActiveValue::Set(model.id),
            tag_id: ActiveValue::Set(tag.id),
        })
        .exec_without_returning(&test.db)
        .await?;

        let rows = repository.models_for_tag(tag.id).await?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Classic Table");
        assert_eq!(rows[0].category, "Table");

        Ok(())
    }
}
