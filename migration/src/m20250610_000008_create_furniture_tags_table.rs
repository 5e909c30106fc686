use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250610_000004_create_furniture_models_table::FurnitureModels,
    m20250610_000006_create_tags_table::Tags,
};

static IDX_FURNITURE_TAGS_TAG_ID: &str = "idx_furniture_tags_tag_id";
static FK_FURNITURE_TAGS_FURNITURE_MODEL_ID: &str = "fk_furniture_tags_furniture_model_id";
static FK_FURNITURE_TAGS_TAG_ID: &str = "fk_furniture_tags_tag_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FurnitureTags::Table)
                    .if_not_exists()
                    .col(integer(FurnitureTags::FurnitureModelId))
                    .col(integer(FurnitureTags::TagId))
                    .primary_key(
                        Index::create()
                            .col(FurnitureTags::FurnitureModelId)
                            .col(FurnitureTags::TagId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FURNITURE_TAGS_TAG_ID)
                    .table(FurnitureTags::Table)
                    .col(FurnitureTags::TagId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FURNITURE_TAGS_FURNITURE_MODEL_ID)
                    .from_tbl(FurnitureTags::Table)
                    .from_col(FurnitureTags::FurnitureModelId)
                    .to_tbl(FurnitureModels::Table)
                    .to_col(FurnitureModels::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FURNITURE_TAGS_TAG_ID)
                    .from_tbl(FurnitureTags::Table)
                    .from_col(FurnitureTags::TagId)
                    .to_tbl(Tags::Table)
                    .to_col(Tags::Id)
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
                    .name(FK_FURNITURE_TAGS_TAG_ID)
                    .table(FurnitureTags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FURNITURE_TAGS_FURNITURE_MODEL_ID)
                    .table(FurnitureTags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FURNITURE_TAGS_TAG_ID)
                    .table(FurnitureTags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FurnitureTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FurnitureTags {
    Table,
    FurnitureModelId,
    TagId,
}
