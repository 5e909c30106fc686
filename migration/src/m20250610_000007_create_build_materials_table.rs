use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250610_000003_create_materials_table::Materials,
    m20250610_000005_create_builds_table::Builds,
};

static IDX_BUILD_MATERIALS_MATERIAL_ID: &str = "idx_build_materials_material_id";
static FK_BUILD_MATERIALS_BUILD_ID: &str = "fk_build_materials_build_id";
static FK_BUILD_MATERIALS_MATERIAL_ID: &str = "fk_build_materials_material_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Composite key keeps at most one row per (build, material) pair;
        // the upsert path relies on it.
        manager
            .create_table(
                Table::create()
                    .table(BuildMaterials::Table)
                    .if_not_exists()
                    .col(integer(BuildMaterials::BuildId))
                    .col(integer(BuildMaterials::MaterialId))
                    .col(double(BuildMaterials::Quantity).default(0.0))
                    .col(string(BuildMaterials::Unit).default("u"))
                    .col(double(BuildMaterials::CostUnit).default(0.0))
                    .primary_key(
                        Index::create()
                            .col(BuildMaterials::BuildId)
                            .col(BuildMaterials::MaterialId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUILD_MATERIALS_MATERIAL_ID)
                    .table(BuildMaterials::Table)
                    .col(BuildMaterials::MaterialId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILD_MATERIALS_BUILD_ID)
                    .from_tbl(BuildMaterials::Table)
                    .from_col(BuildMaterials::BuildId)
                    .to_tbl(Builds::Table)
                    .to_col(Builds::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILD_MATERIALS_MATERIAL_ID)
                    .from_tbl(BuildMaterials::Table)
                    .from_col(BuildMaterials::MaterialId)
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
                    .name(FK_BUILD_MATERIALS_MATERIAL_ID)
                    .table(BuildMaterials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUILD_MATERIALS_BUILD_ID)
                    .table(BuildMaterials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUILD_MATERIALS_MATERIAL_ID)
                    .table(BuildMaterials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BuildMaterials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BuildMaterials {
    Table,
    BuildId,
    MaterialId,
    Quantity,
    Unit,
    CostUnit,
}
