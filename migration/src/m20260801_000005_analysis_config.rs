use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_client::Client;

static FK_ANALYSIS_CONFIG_CLIENT_ID: &str = "fk_analysis_config_client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnalysisConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(AnalysisConfig::Id))
                    .col(integer(AnalysisConfig::ClientId))
                    .col(integer(AnalysisConfig::MinContentLength))
                    .col(json_binary(AnalysisConfig::Topics))
                    .col(json_binary(AnalysisConfig::ExclusionPatterns))
                    .col(timestamp(AnalysisConfig::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ANALYSIS_CONFIG_CLIENT_ID)
                    .from_tbl(AnalysisConfig::Table)
                    .from_col(AnalysisConfig::ClientId)
                    .to_tbl(Client::Table)
                    .to_col(Client::Id)
                    .on_update(ForeignKeyAction::Cascade)
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
                    .name(FK_ANALYSIS_CONFIG_CLIENT_ID)
                    .table(AnalysisConfig::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AnalysisConfig::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AnalysisConfig {
    Table,
    Id,
    ClientId,
    MinContentLength,
    Topics,
    ExclusionPatterns,
    UpdatedAt,
}
