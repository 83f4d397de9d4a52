use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feed kinds understood by the scraper service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Rss,
    Blog,
    News,
    Youtube,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub version: Option<String>,
}

/// One feed to crawl as part of a scrape job.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapeSource {
    pub url: String,
    pub source_type: SourceKind,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub client_id: i32,
    pub sources: Vec<ScrapeSource>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Status snapshot for a scrape job.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapeTask {
    pub task_id: String,
    pub status: TaskStatus,
    pub total_items: Option<i32>,
    pub processed_items: Option<i32>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapeUrlRequest {
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestSourceRequest {
    pub url: String,
    pub source_type: SourceKind,
}

/// Outcome of validating a feed URL without persisting anything.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestSourceResult {
    pub ok: bool,
    pub item_count: i32,
    #[serde(default)]
    pub sample_titles: Vec<String>,
    pub message: Option<String>,
}

/// A single piece of content the service scraped.
///
/// `source_url` is the feed the item came from, used to attribute the item
/// back to a registered source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapedItem {
    pub title: String,
    pub url: String,
    pub body: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source_url: Option<String>,
}
