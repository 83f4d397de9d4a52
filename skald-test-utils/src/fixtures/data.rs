//! Database fixture helpers.
//!
//! Inserts mock rows directly through the entity layer so tests do not have to
//! hand-build active models.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Monotonic counter keeping fixture URLs distinct within a process.
static FIXTURE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_fixture_id() -> usize {
    FIXTURE_COUNTER.fetch_add(1, Ordering::Relaxed)
}

pub struct DataFixtures<'a> {
    pub(crate) db: &'a DatabaseConnection,
}

impl<'a> DataFixtures<'a> {
    /// Insert a mock client.
    pub async fn insert_mock_client(&self) -> Result<entity::client::Model, TestError> {
        let client = entity::client::ActiveModel {
            name: ActiveValue::Set("Acme Outdoor".to_string()),
            description: ActiveValue::Set(Some("Outdoor gear brand".to_string())),
            niche: ActiveValue::Set(Some("outdoor gear".to_string())),
            target_audience: ActiveValue::Set(Some("weekend hikers".to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(client.insert(self.db).await?)
    }

    /// Insert an active mock source for a client.
    ///
    /// Every call gets a distinct feed URL.
    pub async fn insert_mock_source(
        &self,
        client_id: i32,
    ) -> Result<entity::source::Model, TestError> {
        self.insert_source(client_id, true).await
    }

    /// Insert an inactive mock source for a client.
    pub async fn insert_inactive_source(
        &self,
        client_id: i32,
    ) -> Result<entity::source::Model, TestError> {
        self.insert_source(client_id, false).await
    }

    async fn insert_source(
        &self,
        client_id: i32,
        active: bool,
    ) -> Result<entity::source::Model, TestError> {
        let fixture_id = next_fixture_id();

        let source = entity::source::ActiveModel {
            client_id: ActiveValue::Set(client_id),
            name: ActiveValue::Set(format!("Acme Blog {}", fixture_id)),
            url: ActiveValue::Set(format!("https://acme.example.com/feed-{}.xml", fixture_id)),
            source_type: ActiveValue::Set(entity::source::SourceType::Rss),
            active: ActiveValue::Set(active),
            last_scraped_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(source.insert(self.db).await?)
    }

    /// Insert an analyzed mock content row for a client and source.
    pub async fn insert_mock_content(
        &self,
        client_id: i32,
        source_id: i32,
    ) -> Result<entity::content::Model, TestError> {
        let fixture_id = next_fixture_id();

        let content = entity::content::ActiveModel {
            source_id: ActiveValue::Set(source_id),
            client_id: ActiveValue::Set(client_id),
            title: ActiveValue::Set(format!("Trail review {}", fixture_id)),
            url: ActiveValue::Set(format!("https://acme.example.com/posts/{}", fixture_id)),
            body: ActiveValue::Set(Some(
                "A long-form review of this season's trail running shoes.".to_string(),
            )),
            summary: ActiveValue::Set(Some("Season roundup of trail shoes.".to_string())),
            topics: ActiveValue::Set(serde_json::json!(["gear", "running"])),
            published_at: ActiveValue::Set(None),
            scraped_at: ActiveValue::Set(Utc::now().naive_utc()),
            analyzed: ActiveValue::Set(true),
            ..Default::default()
        };

        Ok(content.insert(self.db).await?)
    }

    /// Insert a draft mock brief for a client.
    pub async fn insert_mock_brief(
        &self,
        client_id: i32,
    ) -> Result<entity::brief::Model, TestError> {
        let brief = entity::brief::ActiveModel {
            client_id: ActiveValue::Set(client_id),
            content_ids: ActiveValue::Set(serde_json::json!([])),
            title: ActiveValue::Set("Why layering beats one big jacket".to_string()),
            angle: ActiveValue::Set(Some("Practical over fashionable".to_string())),
            key_points: ActiveValue::Set(serde_json::json!(["Base layers", "Shells"])),
            content_type: ActiveValue::Set("blog_post".to_string()),
            suggested_copy: ActiveValue::Set(None),
            status: ActiveValue::Set(entity::brief::BriefStatus::Draft),
            generated_by: ActiveValue::Set(entity::brief::GeneratedBy::Manual),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(brief.insert(self.db).await?)
    }
}
