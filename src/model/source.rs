use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of feed a source points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum SourceType {
    Rss,
    Blog,
    News,
    Youtube,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SourceDto {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
    pub url: String,
    pub source_type: SourceType,
    pub active: bool,
    pub last_scraped_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateSourceDto {
    pub name: String,
    pub url: String,
    pub source_type: SourceType,
}

/// Full-field overwrite of a source.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateSourceDto {
    pub name: String,
    pub url: String,
    pub source_type: SourceType,
    pub active: bool,
}

/// Request to validate a feed URL against the scraper service.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TestSourceDto {
    pub url: String,
    pub source_type: SourceType,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TestSourceResultDto {
    pub ok: bool,
    pub item_count: i32,
    pub sample_titles: Vec<String>,
    pub message: Option<String>,
}
