use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250610_000003_create_materials_table::Materials,
    m20250610_000006_create_tags_table::Tags,
};

static IDX_TAG_MATERIALS_MATERIAL_ID: &str = "idx_tag_materials_material_id";
static FK_TAG_MATERIALS_TAG_ID: &str = "fk_tag_materials_tag_id";
static FK_TAG_MATERIALS_MATERIAL_ID: &str = "fk_tag_materials_material_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TagMaterials::Table)
                    .if_not_exists()
                    .col(integer(TagMaterials::TagId))
                    .col(integer(TagMaterials::MaterialId))
                    .primary_key(
                        Index::create()
                            .col(TagMaterials::TagId)
                            .col(TagMaterials::MaterialId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TAG_MATERIALS_MATERIAL_ID)
                    .table(TagMaterials::Table)
                    .col(TagMaterials::MaterialId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TAG_MATERIALS_TAG_ID)
                    .from_tbl(TagMaterials::Table)
                    .from_col(TagMaterials::TagId)
                    .to_tbl(Tags::Table)
                    .to_col(Tags::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TAG_MATERIALS_MATERIAL_ID)
                    .from_tbl(TagMaterials::Table)
                    .from_col(TagMaterials::MaterialId)
                    .to_tbl(Materials::Table)
                    .to_col(Materials::Id)
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
                    .name(FK_TAG_MATERIALS_MATERIAL_ID)
                    .table(TagMaterials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TAG_MATERIALS_TAG_ID)
                    .table(TagMaterials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TAG_MATERIALS_MATERIAL_ID)
                    .table(TagMaterials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TagMaterials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TagMaterials {
    Table,
    TagId,
    MaterialId,
}
