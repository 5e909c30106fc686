use sea_orm::{
    sea_query::{Alias, Expr, JoinType},
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::server::error::Error;

pub const DEFAULT_TOP_MATERIALS_LIMIT: u64 = 7;

/// Scalar counts shown on the dashboard.
pub struct GlobalCounts {
    pub models: u64,
    pub builds: u64,
    pub materials: u64,
    pub categories: u64,
}

#[derive(Debug, FromQueryResult)]
pub struct TopMaterialRow {
    pub name: String,
    pub material_type: String,
    pub total_qty: f64,
}

#[derive(Debug, FromQueryResult)]
pub struct CompanyQuantityRow {
    pub company: String,
    pub total_qty: f64,
}

#[derive(Debug, FromQueryResult)]
pub struct CategoryBuildCountRow {
    pub category: String,
    pub build_count: i64,
}

/// Read-only aggregates over the store; nothing here mutates.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn global_counts(&self) -> Result<GlobalCounts, Error> {
        Ok(GlobalCounts {
            models: entity::prelude::FurnitureModel::find().count(self.db).await?,
            builds: entity::prelude::Build::find().count(self.db).await?,
            materials: entity::prelude::Material::find().count(self.db).await?,
            categories: entity::prelude::Category::find().count(self.db).await?,
        })
    }

    /// Most-consumed materials across all builds. Ties on the summed
    /// quantity come back in store order, which is not deterministic.
    pub async fn top_materials_by_quantity(
        &self,
        limit: u64,
    ) -> Result<Vec<TopMaterialRow>, Error> {
        Ok(entity::prelude::BuildMaterial::find()
            .select_only()
            .column_as(entity::material::Column::Name, "name")
            .column_as(entity::material::Column::MaterialType, "material_type")
            .column_as(entity::build_material::Column::Quantity.sum(), "total_qty")
            .join(
                JoinType::InnerJoin,
                entity::build_material::Relation::Material.def(),
            )
            .group_by(entity::material::Column::Id)
            .group_by(entity::material::Column::Name)
            .group_by(entity::material::Column::MaterialType)
            .order_by_desc(Expr::col(Alias::new("total_qty")))
            .limit(limit)
            .into_model::<TopMaterialRow>()
            .all(self.db)
            .await?)
    }

    /// Consumed quantities grouped by the supplier of each material.
    pub async fn material_quantity_by_company(
        &self,
    ) -> Result<Vec<CompanyQuantityRow>, Error> {
        Ok(entity::prelude::BuildMaterial::find()
            .select_only()
            .column_as(entity::company::Column::Name, "company")
            .column_as(entity::build_material::Column::Quantity.sum(), "total_qty")
            .join(
                JoinType::InnerJoin,
                entity::build_material::Relation::Material.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::material::Relation::Company.def(),
            )
            .group_by(entity::company::Column::Id)
            .group_by(entity::company::Column::Name)
            .order_by_desc(Expr::col(Alias::new("total_qty")))
            .into_model::<CompanyQuantityRow>()
            .all(self.db)
            .await?)
    }

    /// Builds per category, walking category -> furniture model ->
    /// build. Left joins keep categories with no models or no builds in
    /// the result with a zero count.
    pub async fn build_count_by_category(
        &self,
    ) -> Result<Vec<CategoryBuildCountRow>, Error> {
        Ok(entity::prelude::Category::find()
            .select_only()
            .column_as(entity::category::Column::Name, "category")
            .column_as(entity::build::Column::Id.count(), "build_count")
            .join(
                JoinType::LeftJoin,
                entity::category::Relation::FurnitureModel.def(),
            )
            .join(
                JoinType::LeftJoin,
                entity::furniture_model::Relation::Build.def(),
            )
            .group_by(entity::category::Column::Id)
            .group_by(entity::category::Column::Name)
            .order_by_desc(Expr::col(Alias::new("build_count")))
            .into_model::<CategoryBuildCountRow>()
            .all(self.db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use atelier_test_utils::prelude::*;
    use sea_orm::DatabaseConnection;

    use crate::server::data::build_material::BuildMaterialRepository;

    use super::StatsService;

    struct Fixture {
        build_id: i32,
        oak_id: i32,
        bolt_id: i32,
        varnish_id: i32,
    }

    /// Two suppliers, two categories (one without any build), three
    /// materials consumed in different amounts.
    async fn seed(db: &DatabaseConnection) -> Result<Fixture, TestError> {
        let acme = fixtures::seed_company(db, "Acme").await?;
        let forge = fixtures::seed_company(db, "Forge & Co").await?;

        let oak = fixtures::seed_material(db, "Oak Plank", "Bois", acme.id).await?;
        let bolt = fixtures::seed_material(db, "Bolt", "Fer", forge.id).await?;
        let varnish = fixtures::seed_material(db, "Varnish", "Plastique", acme.id).await?;

        let tables = fixtures::seed_category(db, "Table").await?;
        fixtures::seed_category(db, "Chaise").await?;

        let model = fixtures::seed_furniture_model(db, "Classic Table", tables.id).await?;
        let build = fixtures::seed_build(db, model.id).await?;

        Ok(Fixture {
            build_id: build.id,
            oak_id: oak.id,
            bolt_id: bolt.id,
            varnish_id: varnish.id,
        })
    }

    #[tokio::test]
    async fn test_global_counts() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let service = StatsService::new(&test.db);

        seed(&test.db).await?;

        let counts = service.global_counts().await.unwrap();

        assert_eq!(counts.models, 1);
        assert_eq!(counts.builds, 1);
        assert_eq!(counts.materials, 3);
        assert_eq!(counts.categories, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_top_materials_orders_by_total_and_truncates() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let service = StatsService::new(&test.db);

        let fixture = seed(&test.db).await?;
        let repository = BuildMaterialRepository::new(&test.db);

        repository
            .upsert(fixture.build_id, fixture.oak_id, 5.0, "u".to_string(), 2.0)
            .await?;
        repository
            .upsert(fixture.build_id, fixture.bolt_id, 12.0, "u".to_string(), 0.1)
            .await?;
        repository
            .upsert(fixture.build_id, fixture.varnish_id, 1.5, "m2".to_string(), 4.0)
            .await?;

        let top = service.top_materials_by_quantity(2).await.unwrap();

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Bolt");
        assert_eq!(top[0].total_qty, 12.0);
        assert_eq!(top[1].name, "Oak Plank");

        Ok(())
    }

    #[tokio::test]
    async fn test_quantity_by_company_walks_material_to_supplier() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let service = StatsService::new(&test.db);

        let fixture = seed(&test.db).await?;
        let repository = BuildMaterialRepository::new(&test.db);

        repository
            .upsert(fixture.build_id, fixture.oak_id, 5.0, "u".to_string(), 2.0)
            .await?;
        repository
            .upsert(fixture.build_id, fixture.varnish_id, 1.5, "m2".to_string(), 4.0)
            .await?;
        repository
            .upsert(fixture.build_id, fixture.bolt_id, 12.0, "u".to_string(), 0.1)
            .await?;

        let rows = service.material_quantity_by_company().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].company, "Forge & Co");
        assert_eq!(rows[0].total_qty, 12.0);
        assert_eq!(rows[1].company, "Acme");
        assert_eq!(rows[1].total_qty, 6.5);

        Ok(())
    }

    #[tokio::test]
    async fn test_build_count_includes_zero_build_categories() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let service = StatsService::new(&test.db);

        seed(&test.db).await?;

        let rows = service.build_count_by_category().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Table");
        assert_eq!(rows[0].build_count, 1);
        assert_eq!(rows[1].category, "Chaise");
        assert_eq!(rows[1].build_count, 0);

        Ok(())
    }
}
