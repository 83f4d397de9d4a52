use serde::{Deserialize, Serialize};

/// Status snapshot for a scrape job, as reported by the scraper service.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ScrapeTaskDto {
    pub task_id: String,
    pub status: String,
    pub total_items: Option<i32>,
    pub processed_items: Option<i32>,
    pub error: Option<String>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ScraperHealthDto {
    pub status: String,
    pub version: Option<String>,
}
