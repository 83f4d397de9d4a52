use std::collections::HashMap;

use dioxus_logger::tracing;
use scraper_client::model::ScrapedItem;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        analysis_config::AnalysisConfigRepository, content::ContentRepository,
        source::SourceRepository,
    },
    error::Error,
};

/// Result of one content sync run.
pub struct SyncOutcome {
    pub fetched: usize,
    pub imported: usize,
    pub skipped: usize,
}

/// Screening rules derived from a client's analysis config.
///
/// A missing config accepts everything.
struct ContentScreen {
    min_content_length: usize,
    topics: Vec<String>,
    exclusion_patterns: Vec<String>,
}

impl ContentScreen {
    fn from_config(config: Option<entity::analysis_config::Model>) -> Self {
        let config = if let Some(config) = config {
            config
        } else {
            return Self {
                min_content_length: 0,
                topics: Vec::new(),
                exclusion_patterns: Vec::new(),
            };
        };

        let min_content_length = usize::try_from(config.min_content_length).unwrap_or(0);
        let topics: Vec<String> = serde_json::from_value::<Vec<String>>(config.topics)
            .unwrap_or_default()
            .into_iter()
            .map(|topic| topic.to_lowercase())
            .collect();
        let exclusion_patterns: Vec<String> =
            serde_json::from_value::<Vec<String>>(config.exclusion_patterns)
                .unwrap_or_default()
                .into_iter()
                .map(|pattern| pattern.to_lowercase())
                .collect();

        Self {
            min_content_length,
            topics,
            exclusion_patterns,
        }
    }

    fn accepts(&self, item: &ScrapedItem) -> bool {
        let body_length = item.body.as_deref().map(str::len).unwrap_or(0);
        if body_length < self.min_content_length {
            return false;
        }

        let haystack = format!("{} {}", item.title, item.url).to_lowercase();
        if self
            .exclusion_patterns
            .iter()
            .any(|pattern| haystack.contains(pattern))
        {
            return false;
        }

        // Topics of interest only narrow the import when configured
        if !self.topics.is_empty() {
            let title = item.title.to_lowercase();
            let matches_topic = item
                .topics
                .iter()
                .any(|topic| self.topics.contains(&topic.to_lowercase()))
                || self.topics.iter().any(|topic| title.contains(topic));

            if !matches_topic {
                return false;
            }
        }

        true
    }
}

pub struct ContentSyncService<'a> {
    db: &'a DatabaseConnection,
    scraper: &'a scraper_client::Client,
}

impl<'a> ContentSyncService<'a> {
    /// Creates a new instance of [`ContentSyncService`]
    pub fn new(db: &'a DatabaseConnection, scraper: &'a scraper_client::Client) -> Self {
        Self { db, scraper }
    }

    /// Pulls the client's scraped contents from the scraper service into the
    /// content table
    ///
    /// Items are screened against the client's analysis config, attributed to
    /// the registered source matching their feed URL, and skipped when already
    /// present, so re-running a sync never duplicates rows.
    pub async fn sync_client(&self, client_id: i32) -> Result<SyncOutcome, Error> {
        let source_repository = SourceRepository::new(self.db);
        let content_repository = ContentRepository::new(self.db);
        let config_repository = AnalysisConfigRepository::new(self.db);

        let sources = source_repository.list_by_client(client_id).await?;
        let source_ids_by_url: HashMap<String, i32> = sources
            .iter()
            .map(|source| (source.url.clone(), source.id))
            .collect();
        let fallback_source_id = sources.first().map(|source| source.id);

        let config = config_repository.get_by_client(client_id).await?;
        let screen = ContentScreen::from_config(config);

        let items = self.scraper.client_contents(client_id).await?;
        let fetched = items.len();

        let mut imported = 0;
        let mut skipped = 0;

        for item in items {
            let source_id = item
                .source_url
                .as_deref()
                .and_then(|url| source_ids_by_url.get(url).copied())
                .or(fallback_source_id);

            let source_id = if let Some(source_id) = source_id {
                source_id
            } else {
                tracing::warn!(
                    client_id = %client_id,
                    url = %item.url,
                    "Skipping scraped item with no registered source"
                );
                skipped += 1;
                continue;
            };

            if !screen.accepts(&item) {
                skipped += 1;
                continue;
            }

            if content_repository
                .get_by_url(client_id, &item.url)
                .await?
                .is_some()
            {
                skipped += 1;
                continue;
            }

            content_repository
                .create(client_id, source_id, item, true)
                .await?;
            imported += 1;
        }

        tracing::info!(
            client_id = %client_id,
            "Content sync finished: {} fetched, {} imported, {} skipped",
            fetched,
            imported,
            skipped
        );

        Ok(SyncOutcome {
            fetched,
            imported,
            skipped,
        })
    }
}
