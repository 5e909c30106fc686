use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema};
use sea_orm::sea_query::Index;

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Opens an in-memory SQLite database with the full schema created
    /// from the entity definitions.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::Company),
            schema.create_table_from_entity(entity::prelude::Category),
            schema.create_table_from_entity(entity::prelude::Material),
            schema.create_table_from_entity(entity::prelude::FurnitureModel),
            schema.create_table_from_entity(entity::prelude::Build),
            schema.create_table_from_entity(entity::prelude::Tag),
            schema.create_table_from_entity(entity::prelude::BuildMaterial),
            schema.create_table_from_entity(entity::prelude::FurnitureTag),
            schema.create_table_from_entity(entity::prelude::TagMaterial),
        ];

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        // The migration crate declares this composite unique index; the
        // entity derive cannot express it, so tests add it by hand.
        let materials_name_company = Index::create()
            .name("idx_materials_name_company_id")
            .table(entity::material::Entity)
            .col(entity::material::Column::Name)
            .col(entity::material::Column::CompanyId)
            .unique()
            .to_owned();

        db.execute(&materials_name_company).await?;

        Ok(TestSetup { db })
    }
}
