use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub niche: Option<String>,
    pub target_audience: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Payload for creating a client.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateClientDto {
    pub name: String,
    pub description: Option<String>,
    pub niche: Option<String>,
    pub target_audience: Option<String>,
}

/// Full-field overwrite of a client.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateClientDto {
    pub name: String,
    pub description: Option<String>,
    pub niche: Option<String>,
    pub target_audience: Option<String>,
}

/// Per-client content screening settings.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AnalysisConfigDto {
    pub min_content_length: i32,
    pub topics: Vec<String>,
    pub exclusion_patterns: Vec<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateAnalysisConfigDto {
    pub min_content_length: i32,
    pub topics: Vec<String>,
    pub exclusion_patterns: Vec<String>,
}
