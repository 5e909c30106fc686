use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250610_000002_create_categories_table::Categories;

static IDX_FURNITURE_MODELS_CATEGORY_ID: &str = "idx_furniture_models_category_id";
static FK_FURNITURE_MODELS_CATEGORY_ID: &str = "fk_furniture_models_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FurnitureModels::Table)
                    .if_not_exists()
                    .col(pk_auto(FurnitureModels::Id))
                    .col(string(FurnitureModels::Name))
                    .col(text_null(FurnitureModels::Description))
                    .col(integer(FurnitureModels::CategoryId))
                    .col(timestamp(FurnitureModels::CreatedAt))
                    .col(timestamp(FurnitureModels::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FURNITURE_MODELS_CATEGORY_ID)
                    .table(FurnitureModels::Table)
                    .col(FurnitureModels::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FURNITURE_MODELS_CATEGORY_ID)
                    .from_tbl(FurnitureModels::Table)
                    .from_col(FurnitureModels::CategoryId)
                    .to_tbl(Categories::Table)
                    .to_col(Categories::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FURNITURE_MODELS_CATEGORY_ID)
                    .table(FurnitureModels::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FURNITURE_MODELS_CATEGORY_ID)
                    .table(FurnitureModels::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FurnitureModels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FurnitureModels {
    Table,
    Id,
    Name,
    Description,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}
