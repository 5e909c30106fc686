pub use sea_orm_migration::prelude::*;

mod m20250610_000001_create_companies_table;
mod m20250610_000002_create_categories_table;
mod m20250610_000003_create_materials_table;
mod m20250610_000004_create_furniture_models_table;
mod m20250610_000005_create_builds_table;
mod m20250610_000006_create_tags_table;
mod m20250610_000007_create_build_materials_table;
mod m20250610_000008_create_furniture_tags_table;
mod m20250610_000009_create_tag_materials_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_000001_create_companies_table::Migration),
            Box::new(m20250610_000002_create_categories_table::Migration),
            Box::new(m20250610_000003_create_materials_table::Migration),
            Box::new(m20250610_000004_create_furniture_models_table::Migration),
            Box::new(m20250610_000005_create_builds_table::Migration),
            Box::new(m20250610_000006_create_tags_table::Migration),
            Box::new(m20250610_000007_create_build_materials_table::Migration),
            Box::new(m20250610_000008_create_furniture_tags_table::Migration),
            Box::new(m20250610_000009_create_tag_materials_table::Migration),
        ]
    }
}
