use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_client::Client;

static FK_SOURCE_CLIENT_ID: &str = "fk_source_client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Source::Table)
                    .if_not_exists()
                    .col(pk_auto(Source::Id))
                    .col(integer(Source::ClientId))
                    .col(string(Source::Name))
                    .col(string(Source::Url))
                    .col(string_len(Source::SourceType, 16))
                    .col(boolean(Source::Active))
                    .col(timestamp_null(Source::LastScrapedAt))
                    .col(timestamp(Source::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SOURCE_CLIENT_ID)
                    .from_tbl(Source::Table)
                    .from_col(Source::ClientId)
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
                    .name(FK_SOURCE_CLIENT_ID)
                    .table(Source::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Source::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Source {
    Table,
    Id,
    ClientId,
    Name,
    Url,
    SourceType,
    Active,
    LastScrapedAt,
    CreatedAt,
}
