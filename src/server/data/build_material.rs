use sea_orm::{
    sea_query::{JoinType, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Build-material row joined with the material's descriptive fields;
/// `id` is the material id, matching the API shape.
#[derive(Debug, FromQueryResult)]
pub struct BuildMaterialRow {
    pub id: i32,
    pub name: String,
    pub material_type: String,
    pub company_id: i32,
    pub quantity: f64,
    pub unit: String,
    pub cost_unit: f64,
}

pub struct BuildMaterialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BuildMaterialRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Single-statement insert-or-update keyed on the composite primary
    /// key. Two concurrent calls for the same pair cannot both insert;
    /// the store resolves the conflict and the last write wins.
    pub async fn upsert(
        &self,
        build_id: i32,
        material_id: i32,
        quantity: f64,
        unit: String,
        cost_unit: f64,
    ) -> Result<entity::build_material::Model, DbErr> {
        let row = entity::build_material::ActiveModel {
            build_id: ActiveValue::Set(build_id),
            material_id: ActiveValue::Set(material_id),
            quantity: ActiveValue::Set(quantity),
            unit: ActiveValue::Set(unit),
            cost_unit: ActiveValue::Set(cost_unit),
        };

        entity::prelude::BuildMaterial::insert(row)
            .on_conflict(
                OnConflict::columns([
                    entity::build_material::Column::BuildId,
                    entity::build_material::Column::MaterialId,
                ])
                .update_columns([
                    entity::build_material::Column::Quantity,
                    entity::build_material::Column::Unit,
                    entity::build_material::Column::CostUnit,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Deletes the pair if present; reports how many rows went away so
    /// the caller can stay idempotent.
    pub async fn remove(&self, build_id: i32, material_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::BuildMaterial::delete_many()
            .filter(entity::build_material::Column::BuildId.eq(build_id))
            .filter(entity::build_material::Column::MaterialId.eq(material_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn list_for_build(&self, build_id: i32) -> Result<Vec<BuildMaterialRow>, DbErr> {
        entity::prelude::BuildMaterial::find()
            .select_only()
            .column_as(entity::build_material::Column::MaterialId, "id")
            .column_as(entity::material::Column::Name, "name")
            .column_as(entity::material::Column::MaterialType, "material_type")
            .column_as(entity::material::Column::CompanyId, "company_id")
            .columns([
                entity::build_material::Column::Quantity,
                entity::build_material::Column::Unit,
                entity::build_material::Column::CostUnit,
            ])
            .join(
                JoinType::InnerJoin,
                entity::build_material::Relation::Material.def(),
            )
            .filter(entity::build_material::Column::BuildId.eq(build_id))
            .order_by_asc(entity::material::Column::Name)
            .into_model::<BuildMaterialRow>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use atelier_test_utils::prelude::*;
    use sea_orm::DatabaseConnection;

    use super::BuildMaterialRepository;

    async fn seed(db: &DatabaseConnection) -> Result<(i32, i32), TestError> {
        let company = fixtures::seed_company(db, "Acme").await?;
        let category = fixtures::seed_category(db, "Table").await?;
        let material = fixtures::seed_material(db, "Oak Plank", "Bois", company.id).await?;
        let model = fixtures::seed_furniture_model(db, "Classic Table", category.id).await?;
        let build = fixtures::seed_build(db, model.id).await?;

        Ok((build.id, material.id))
    }

    #[tokio::test]
    async fn test_upsert_twice_keeps_one_row_with_latest_values() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = BuildMaterialRepository::new(&test.db);

        let (build_id, material_id) = seed(&test.db).await?;

        repository
            .upsert(build_id, material_id, 5.0, "u".to_string(), 2.0)
            .await?;
        let row = repository
            .upsert(build_id, material_id, 8.0, "kg".to_string(), 3.5)
            .await?;

        assert_eq!(row.quantity, 8.0);
        assert_eq!(row.unit, "kg");
        assert_eq!(row.cost_unit, 3.5);

        let rows = repository.list_for_build(build_id).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 8.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_never_added_pair_is_noop() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = BuildMaterialRepository::new(&test.db);

        let (build_id, material_id) = seed(&test.db).await?;

        assert_eq!(repository.remove(build_id, material_id).await?, 0);

        repository
            .upsert(build_id, material_id, 5.0, "u".to_string(), 2.0)
            .await?;

        assert_eq!(repository.remove(build_id, material_id).await?, 1);
        assert_eq!(repository.remove(build_id, material_id).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_material_name() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = BuildMaterialRepository::new(&test.db);

        let company = fixtures::seed_company(&test.db, "Acme").await?;
        let category = fixtures::seed_category(&test.db, "Table").await?;
        let oak = fixtures::seed_material(&test.db, "Oak Plank", "Bois", company.id).await?;
        let bolt = fixtures::seed_material(&test.db, "Bolt", "Fer", company.id).await?;
        let model = fixtures::seed_furniture_model(&test.db, "Classic Table", category.id).await?;
        let build = fixtures::seed_build(&test.db, model.id).await?;

        repository
            .upsert(build.id, oak.id, 5.0, "u".to_string(), 2.0)
            .await?;
        repository
            .upsert(build.id, bolt.id, 12.0, "u".to_string(), 0.1)
            .await?;

        let rows = repository.list_for_build(build.id).await?;

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bolt", "Oak Plank"]);

        Ok(())
    }
}
