use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::source::{CreateSourceDto, UpdateSourceDto};

pub struct SourceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SourceRepository<'a> {
    /// Creates a new instance of [`SourceRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new source for a client
    ///
    /// New sources start out active and unscraped.
    pub async fn create(
        &self,
        client_id: i32,
        source: CreateSourceDto,
    ) -> Result<entity::source::Model, DbErr> {
        let source = entity::source::ActiveModel {
            client_id: ActiveValue::Set(client_id),
            name: ActiveValue::Set(source.name),
            url: ActiveValue::Set(source.url),
            source_type: ActiveValue::Set(source.source_type.into()),
            active: ActiveValue::Set(true),
            last_scraped_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        source.insert(self.db).await
    }

    pub async fn get(&self, source_id: i32) -> Result<Option<entity::source::Model>, DbErr> {
        entity::prelude::Source::find_by_id(source_id).one(self.db).await
    }

    pub async fn list_by_client(
        &self,
        client_id: i32,
    ) -> Result<Vec<entity::source::Model>, DbErr> {
        entity::prelude::Source::find()
            .filter(entity::source::Column::ClientId.eq(client_id))
            .order_by_asc(entity::source::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites every user-editable field of a source
    ///
    /// Returns `None` when no source with the given ID exists.
    pub async fn update(
        &self,
        source_id: i32,
        source: UpdateSourceDto,
    ) -> Result<Option<entity::source::Model>, DbErr> {
        let existing = self.get(source_id).await?;

        let existing = if let Some(existing) = existing {
            existing
        } else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.name = ActiveValue::Set(source.name);
        model.url = ActiveValue::Set(source.url);
        model.source_type = ActiveValue::Set(source.source_type.into());
        model.active = ActiveValue::Set(source.active);

        Ok(Some(model.update(self.db).await?))
    }

    /// Deletes a source
    ///
    /// Returns OK regardless of the source existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, source_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Source::delete_by_id(source_id)
            .exec(self.db)
            .await
    }

    /// Stamps the given sources as scraped at the given time
    pub async fn mark_scraped(
        &self,
        source_ids: &[i32],
        scraped_at: NaiveDateTime,
    ) -> Result<(), DbErr> {
        entity::prelude::Source::update_many()
            .col_expr(
                entity::source::Column::LastScrapedAt,
                Expr::value(scraped_at),
            )
            .filter(entity::source::Column::Id.is_in(source_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
