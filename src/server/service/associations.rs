use sea_orm::{
    sea_query::JoinType,
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, SqlErr, TransactionTrait,
};

use crate::server::{
    data::{
        furniture_model::FurnitureModelRepository,
        tag::{TagModelRow, TagRepository},
    },
    error::Error,
};

/// Replaces whole many-to-many association sets.
///
/// Both relations here carry no payload on the join row, so a replace is
/// a transactional delete-and-reinsert rather than a diff. Readers never
/// observe the window between the two statements.
pub struct AssociationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssociationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes the persisted tag set of a model exactly equal to `tag_ids`.
    /// An unknown tag id fails the whole call and rolls the replace back.
    pub async fn replace_model_tags(&self, model_id: i32, tag_ids: &[i32]) -> Result<(), Error> {
        if !FurnitureModelRepository::new(self.db).exists(model_id).await? {
            return Err(Error::NotFound("furniture model"));
        }

        let txn = self.db.begin().await?;

        entity::prelude::FurnitureTag::delete_many()
            .filter(entity::furniture_tag::Column::FurnitureModelId.eq(model_id))
            .exec(&txn)
            .await?;

        if !tag_ids.is_empty() {
            let rows = tag_ids.iter().map(|tag_id| entity::furniture_tag::ActiveModel {
                furniture_model_id: ActiveValue::Set(model_id),
                tag_id: ActiveValue::Set(*tag_id),
            });

            entity::prelude::FurnitureTag::insert_many(rows)
                .exec_without_returning(&txn)
                .await
                .map_err(reference_error("tag id"))?;
        }

        txn.commit().await?;

        Ok(())
    }

    pub async fn model_tags(&self, model_id: i32) -> Result<Vec<entity::tag::Model>, Error> {
        let Some((model, _)) = FurnitureModelRepository::new(self.db).get(model_id).await?
        else {
            return Err(Error::NotFound("furniture model"));
        };

        Ok(model
            .find_related(entity::prelude::Tag)
            .order_by_asc(entity::tag::Column::Label)
            .all(self.db)
            .await?)
    }

    /// Makes the persisted material set of a tag exactly equal to
    /// `material_ids`, with the same all-or-nothing contract as
    /// [`Self::replace_model_tags`].
    pub async fn replace_tag_materials(
        &self,
        tag_id: i32,
        material_ids: &[i32],
    ) -> Result<(), Error> {
        if !TagRepository::new(self.db).exists(tag_id).await? {
            return Err(Error::NotFound("tag"));
        }

        let txn = self.db.begin().await?;

        entity::prelude::TagMaterial::delete_many()
            .filter(entity::tag_material::Column::TagId.eq(tag_id))
            .exec(&txn)
            .await?;

        if !material_ids.is_empty() {
            let rows = material_ids
                .iter()
                .map(|material_id| entity::tag_material::ActiveModel {
                    tag_id: ActiveValue::Set(tag_id),
                    material_id: ActiveValue::Set(*material_id),
                });

            entity::prelude::TagMaterial::insert_many(rows)
                .exec_without_returning(&txn)
                .await
                .map_err(reference_error("material id"))?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Materials carrying the tag, joined with their supplier's name.
    pub async fn tag_materials(
        &self,
        tag_id: i32,
    ) -> Result<Vec<(entity::material::Model, Option<entity::company::Model>)>, Error> {
        if !TagRepository::new(self.db).exists(tag_id).await? {
            return Err(Error::NotFound("tag"));
        }

        Ok(entity::prelude::Material::find()
            .join(
                JoinType::InnerJoin,
                entity::material::Relation::TagMaterial.def(),
            )
            .filter(entity::tag_material::Column::TagId.eq(tag_id))
            .order_by_asc(entity::material::Column::Name)
            .find_also_related(entity::prelude::Company)
            .all(self.db)
            .await?)
    }

    pub async fn tag_models(&self, tag_id: i32) -> Result<Vec<TagModelRow>, Error> {
        if !TagRepository::new(self.db).exists(tag_id).await? {
            return Err(Error::NotFound("tag"));
        }

        Ok(TagRepository::new(self.db).models_for_tag(tag_id).await?)
    }
}

/// An insert into a join table can only hit a foreign-key violation when
/// a supplied related id does not resolve.
fn reference_error(field: &'static str) -> impl Fn(DbErr) -> Error {
    move |e| match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => Error::InvalidReference(field),
        _ => Error::DbErr(e),
    }
}
