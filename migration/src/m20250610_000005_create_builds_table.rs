use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250610_000004_create_furniture_models_table::FurnitureModels;

static IDX_BUILDS_FURNITURE_MODEL_ID: &str = "idx_builds_furniture_model_id";
static FK_BUILDS_FURNITURE_MODEL_ID: &str = "fk_builds_furniture_model_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Builds::Table)
                    .if_not_exists()
                    .col(pk_auto(Builds::Id))
                    .col(integer(Builds::FurnitureModelId))
                    .col(string_null(Builds::Ref))
                    .col(date_null(Builds::DateCreation))
                    .col(string_null(Builds::Destination))
                    .col(text_null(Builds::Notes))
                    .col(timestamp(Builds::CreatedAt))
                    .col(timestamp(Builds::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUILDS_FURNITURE_MODEL_ID)
                    .table(Builds::Table)
                    .col(Builds::FurnitureModelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILDS_FURNITURE_MODEL_ID)
                    .from_tbl(Builds::Table)
                    .from_col(Builds::FurnitureModelId)
                    .to_tbl(FurnitureModels::Table)
                    .to_col(FurnitureModels::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUILDS_FURNITURE_MODEL_ID)
                    .table(Builds::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUILDS_FURNITURE_MODEL_ID)
                    .table(Builds::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Builds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Builds {
    Table,
    Id,
    FurnitureModelId,
    Ref,
    DateCreation,
    Destination,
    Notes,
    CreatedAt,
    UpdatedAt,
}
