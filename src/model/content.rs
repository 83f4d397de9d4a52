use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ContentDto {
    pub id: i32,
    pub source_id: i32,
    pub client_id: i32,
    pub title: String,
    pub url: String,
    pub body: Option<String>,
    pub summary: Option<String>,
    pub topics: Vec<String>,
    pub published_at: Option<NaiveDateTime>,
    pub scraped_at: NaiveDateTime,
    pub analyzed: bool,
}

/// Result of pulling a client's contents from the scraper service.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SyncReportDto {
    /// Items the scraper service returned
    pub fetched: usize,
    /// Items imported into the content table
    pub imported: usize,
    /// Items dropped by screening or already present
    pub skipped: usize,
}
