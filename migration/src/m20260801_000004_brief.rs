use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_client::Client;

static FK_BRIEF_CLIENT_ID: &str = "fk_brief_client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Brief::Table)
                    .if_not_exists()
                    .col(pk_auto(Brief::Id))
                    .col(integer(Brief::ClientId))
                    .col(json_binary(Brief::ContentIds))
                    .col(string(Brief::Title))
                    .col(string_null(Brief::Angle))
                    .col(json_binary(Brief::KeyPoints))
                    .col(string(Brief::ContentType))
                    .col(text_null(Brief::SuggestedCopy))
                    .col(string_len(Brief::Status, 16))
                    .col(string_len(Brief::GeneratedBy, 16))
                    .col(timestamp(Brief::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BRIEF_CLIENT_ID)
                    .from_tbl(Brief::Table)
                    .from_col(Brief::ClientId)
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
                    .name(FK_BRIEF_CLIENT_ID)
                    .table(Brief::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Brief::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Brief {
    Table,
    Id,
    ClientId,
    ContentIds,
    Title,
    Angle,
    KeyPoints,
    ContentType,
    SuggestedCopy,
    Status,
    GeneratedBy,
    CreatedAt,
}
