use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250610_000001_create_companies_table::Companies;

static IDX_MATERIALS_NAME_COMPANY_ID: &str = "idx_materials_name_company_id";
static FK_MATERIALS_COMPANY_ID: &str = "fk_materials_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(pk_auto(Materials::Id))
                    .col(string(Materials::Name))
                    .col(string(Materials::Type))
                    .col(integer(Materials::CompanyId))
                    .col(timestamp(Materials::CreatedAt))
                    .col(timestamp(Materials::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One material name per supplier, enforced by the store rather
        // than a pre-insert lookup.
        manager
            .create_index(
                Index::create()
                    .name(IDX_MATERIALS_NAME_COMPANY_ID)
                    .table(Materials::Table)
                    .col(Materials::Name)
                    .col(Materials::CompanyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATERIALS_COMPANY_ID)
                    .from_tbl(Materials::Table)
                    .from_col(Materials::CompanyId)
                    .to_tbl(Companies::Table)
                    .to_col(Companies::Id)
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
                    .name(FK_MATERIALS_COMPANY_ID)
                    .table(Materials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATERIALS_NAME_COMPANY_ID)
                    .table(Materials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Materials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Materials {
    Table,
    Id,
    Name,
    Type,
    CompanyId,
    CreatedAt,
    UpdatedAt,
}
