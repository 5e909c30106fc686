use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        build::{BuildDetailRow, BuildRepository},
        build_material::{BuildMaterialRepository, BuildMaterialRow},
        material::MaterialRepository,
    },
    error::Error,
};

/// Maintains the set of materials consumed by a build.
pub struct BuildMaterialService<'a> {
    db: &'a DatabaseConnection,
}

/// Build detail together with its material list.
pub struct BuildDetail {
    pub build: BuildDetailRow,
    pub materials: Vec<BuildMaterialRow>,
}

impl<'a> BuildMaterialService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that a build consumes a material, overwriting the
    /// quantity/unit/cost if the pair is already present. The write is a
    /// single insert-or-update statement, so concurrent calls for the
    /// same pair cannot produce two rows.
    pub async fn add_or_update(
        &self,
        build_id: i32,
        material_id: i32,
        quantity: f64,
        unit: String,
        cost_unit: f64,
    ) -> Result<entity::build_material::Model, Error> {
        if !BuildRepository::new(self.db).exists(build_id).await? {
            return Err(Error::NotFound("build"));
        }

        if !MaterialRepository::new(self.db).exists(material_id).await? {
            return Err(Error::InvalidReference("material_id"));
        }

        Ok(BuildMaterialRepository::new(self.db)
            .upsert(build_id, material_id, quantity, unit, cost_unit)
            .await?)
    }

    /// Removes a material from a build. Removing a pair that was never
    /// added is a no-op; only a missing build is an error.
    pub async fn remove(&self, build_id: i32, material_id: i32) -> Result<(), Error> {
        if !BuildRepository::new(self.db).exists(build_id).await? {
            return Err(Error::NotFound("build"));
        }

        BuildMaterialRepository::new(self.db)
            .remove(build_id, material_id)
            .await?;

        Ok(())
    }

    pub async fn list(&self, build_id: i32) -> Result<Vec<BuildMaterialRow>, Error> {
        if !BuildRepository::new(self.db).exists(build_id).await? {
            return Err(Error::NotFound("build"));
        }

        Ok(BuildMaterialRepository::new(self.db)
            .list_for_build(build_id)
            .await?)
    }

    pub async fn detail(&self, build_id: i32) -> Result<BuildDetail, Error> {
        let Some(build) = BuildRepository::new(self.db).get_detail(build_id).await? else {
            return Err(Error::NotFound("build"));
        };

        let materials = BuildMaterialRepository::new(self.db)
            .list_for_build(build_id)
            .await?;

        Ok(BuildDetail { build, materials })
    }
}

#[cfg(test)]
mod tests {
    use atelier_test_utils::prelude::*;
    use sea_orm::DatabaseConnection;

    use crate::server::error::Error;

    use super::BuildMaterialService;

    async fn seed(db: &DatabaseConnection) -> Result<(i32, i32), TestError> {
        let company = fixtures::seed_company(db, "Acme").await?;
        let category = fixtures::seed_category(db, "Table").await?;
        let material = fixtures::seed_material(db, "Oak Plank", "Bois", company.id).await?;
        let model = fixtures::seed_furniture_model(db, "Classic Table", category.id).await?;
        let build = fixtures::seed_build(db, model.id).await?;

        Ok((build.id, material.id))
    }

    #[tokio::test]
    async fn test_add_or_update_requires_existing_build() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let service = BuildMaterialService::new(&test.db);

        let result = service
            .add_or_update(42, 1, 5.0, "u".to_string(), 2.0)
            .await;

        assert!(matches!(result, Err(Error::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_or_update_requires_existing_material() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let service = BuildMaterialService::new(&test.db);

        let (build_id, _) = seed(&test.db).await?;

        let result = service
            .add_or_update(build_id, 999, 5.0, "u".to_string(), 2.0)
            .await;

        assert!(matches!(result, Err(Error::InvalidReference(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_build_is_not_found() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let service = BuildMaterialService::new(&test.db);

        let result = service.remove(42, 1).await;

        assert!(matches!(result, Err(Error::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_absent_pair_succeeds() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let service = BuildMaterialService::new(&test.db);

        let (build_id, material_id) = seed(&test.db).await?;

        service.remove(build_id, material_id).await.unwrap();

        Ok(())
    }

    #[tokio::test]
    async fn test_detail_reflects_upsert_and_removal() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let service = BuildMaterialService::new(&test.db);

        let (build_id, material_id) = seed(&test.db).await?;

        service
            .add_or_update(build_id, material_id, 5.0, "u".to_string(), 2.0)
            .await
            .unwrap();

        let detail = service.detail(build_id).await.unwrap();
        assert_eq!(detail.materials.len(), 1);
        assert_eq!(detail.materials[0].quantity, 5.0);

        service
            .add_or_update(build_id, material_id, 8.0, "u".to_string(), 2.0)
            .await
            .unwrap();

        let detail = service.detail(build_id).await.unwrap();
        assert_eq!(detail.materials.len(), 1);
        assert_eq!(detail.materials[0].quantity, 8.0);

        service.remove(build_id, material_id).await.unwrap();

        let detail = service.detail(build_id).await.unwrap();
        assert!(detail.materials.is_empty());

        Ok(())
    }
}
