use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_client::Client, m20260801_000002_source::Source};

static FK_CONTENT_SOURCE_ID: &str = "fk_content_source_id";
static FK_CONTENT_CLIENT_ID: &str = "fk_content_client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Content::Table)
                    .if_not_exists()
                    .col(pk_auto(Content::Id))
                    .col(integer(Content::SourceId))
                    .col(integer(Content::ClientId))
                    .col(string(Content::Title))
                    .col(string(Content::Url))
                    .col(text_null(Content::Body))
                    .col(text_null(Content::Summary))
                    .col(json_binary(Content::Topics))
                    .col(timestamp_null(Content::PublishedAt))
                    .col(timestamp(Content::ScrapedAt))
                    .col(boolean(Content::Analyzed))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONTENT_SOURCE_ID)
                    .from_tbl(Content::Table)
                    .from_col(Content::SourceId)
                    .to_tbl(Source::Table)
                    .to_col(Source::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONTENT_CLIENT_ID)
                    .from_tbl(Content::Table)
                    .from_col(Content::ClientId)
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
                    .name(FK_CONTENT_CLIENT_ID)
                    .table(Content::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONTENT_SOURCE_ID)
                    .table(Content::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Content::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Content {
    Table,
    Id,
    SourceId,
    ClientId,
    Title,
    Url,
    Body,
    Summary,
    Topics,
    PublishedAt,
    ScrapedAt,
    Analyzed,
}
