use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use scraper_client::model::ScrapedItem;

pub struct ContentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentRepository<'a> {
    /// Creates a new instance of [`ContentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an item scraped for a client
    pub async fn create(
        &self,
        client_id: i32,
        source_id: i32,
        item: ScrapedItem,
        analyzed: bool,
    ) -> Result<entity::content::Model, DbErr> {
        let content = entity::content::ActiveModel {
            source_id: ActiveValue::Set(source_id),
            client_id: ActiveValue::Set(client_id),
            title: ActiveValue::Set(item.title),
            url: ActiveValue::Set(item.url),
            body: ActiveValue::Set(item.body),
            summary: ActiveValue::Set(item.summary),
            topics: ActiveValue::Set(serde_json::json!(item.topics)),
            published_at: ActiveValue::Set(item.published_at.map(|at| at.naive_utc())),
            scraped_at: ActiveValue::Set(Utc::now().naive_utc()),
            analyzed: ActiveValue::Set(analyzed),
            ..Default::default()
        };

        content.insert(self.db).await
    }

    /// Finds a client's content row by its canonical URL
    ///
    /// There is no uniqueness constraint on URLs; this returns the first match
    /// and is used to keep content sync idempotent.
    pub async fn get_by_url(
        &self,
        client_id: i32,
        url: &str,
    ) -> Result<Option<entity::content::Model>, DbErr> {
        entity::prelude::Content::find()
            .filter(entity::content::Column::ClientId.eq(client_id))
            .filter(entity::content::Column::Url.eq(url))
            .one(self.db)
            .await
    }

    /// Lists a client's contents, newest first, optionally filtered by the
    /// analyzed flag
    pub async fn list_by_client(
        &self,
        client_id: i32,
        analyzed: Option<bool>,
    ) -> Result<Vec<entity::content::Model>, DbErr> {
        let mut query = entity::prelude::Content::find()
            .filter(entity::content::Column::ClientId.eq(client_id));

        if let Some(analyzed) = analyzed {
            query = query.filter(entity::content::Column::Analyzed.eq(analyzed));
        }

        query
            .order_by_desc(entity::content::Column::ScrapedAt)
            .all(self.db)
            .await
    }

    /// Fetches the subset of the given content IDs that belong to the client
    pub async fn get_many(
        &self,
        client_id: i32,
        content_ids: &[i32],
    ) -> Result<Vec<entity::content::Model>, DbErr> {
        entity::prelude::Content::find()
            .filter(entity::content::Column::ClientId.eq(client_id))
            .filter(entity::content::Column::Id.is_in(content_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Lists the client's most recently scraped analyzed contents
    pub async fn list_recent_analyzed(
        &self,
        client_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::content::Model>, DbErr> {
        entity::prelude::Content::find()
            .filter(entity::content::Column::ClientId.eq(client_id))
            .filter(entity::content::Column::Analyzed.eq(true))
            .order_by_desc(entity::content::Column::ScrapedAt)
            .limit(limit)
            .all(self.db)
            .await
    }
}
