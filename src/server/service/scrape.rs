use chrono::Utc;
use dioxus_logger::tracing;
use scraper_client::model::{ScrapeRequest, ScrapeSource, ScrapeTask, TestSourceRequest, TestSourceResult};
use sea_orm::DatabaseConnection;

use crate::{
    model::source::TestSourceDto,
    server::{data::source::SourceRepository, error::scrape::ScrapeError, error::Error},
};

pub struct ScrapeService<'a> {
    db: &'a DatabaseConnection,
    scraper: &'a scraper_client::Client,
}

impl<'a> ScrapeService<'a> {
    /// Creates a new instance of [`ScrapeService`]
    pub fn new(db: &'a DatabaseConnection, scraper: &'a scraper_client::Client) -> Self {
        Self { db, scraper }
    }

    /// Starts a scrape job covering all of the client's active sources
    ///
    /// The involved sources are stamped with the job start time; job progress
    /// is tracked by polling the returned task.
    pub async fn start_for_client(&self, client_id: i32) -> Result<ScrapeTask, Error> {
        let source_repository = SourceRepository::new(self.db);

        let sources = source_repository.list_by_client(client_id).await?;
        let active: Vec<entity::source::Model> =
            sources.into_iter().filter(|source| source.active).collect();

        if active.is_empty() {
            return Err(ScrapeError::NoActiveSources(client_id).into());
        }

        let request = ScrapeRequest {
            client_id,
            sources: active
                .iter()
                .map(|source| ScrapeSource {
                    url: source.url.clone(),
                    source_type: crate::model::source::SourceType::from(
                        source.source_type.clone(),
                    )
                    .into(),
                })
                .collect(),
        };

        let task = self.scraper.start_scrape(&request).await?;

        let source_ids: Vec<i32> = active.iter().map(|source| source.id).collect();
        source_repository
            .mark_scraped(&source_ids, Utc::now().naive_utc())
            .await?;

        tracing::info!(
            client_id = %client_id,
            task_id = %task.task_id,
            "Started scrape job covering {} sources",
            source_ids.len()
        );

        Ok(task)
    }

    /// Validates a feed URL against the scraper service without persisting
    /// anything
    pub async fn test_source(&self, request: TestSourceDto) -> Result<TestSourceResult, Error> {
        let request = TestSourceRequest {
            url: request.url,
            source_type: request.source_type.into(),
        };

        Ok(self.scraper.test_source(&request).await?)
    }
}
