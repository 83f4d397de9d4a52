use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Review state of a brief.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum BriefStatus {
    Draft,
    Approved,
    Rejected,
}

/// How a brief was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum GeneratedBy {
    Manual,
    Claude,
    Openai,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BriefDto {
    pub id: i32,
    pub client_id: i32,
    pub content_ids: Vec<i32>,
    pub title: String,
    pub angle: Option<String>,
    pub key_points: Vec<String>,
    pub content_type: String,
    pub suggested_copy: Option<String>,
    pub status: BriefStatus,
    pub generated_by: GeneratedBy,
    pub created_at: NaiveDateTime,
}

/// Payload for creating a brief by hand.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateBriefDto {
    pub title: String,
    pub angle: Option<String>,
    pub key_points: Vec<String>,
    pub content_type: String,
    pub suggested_copy: Option<String>,
    #[serde(default)]
    pub content_ids: Vec<i32>,
}

/// Full-field overwrite of a brief, including its review status.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateBriefDto {
    pub title: String,
    pub angle: Option<String>,
    pub key_points: Vec<String>,
    pub content_type: String,
    pub suggested_copy: Option<String>,
    pub status: BriefStatus,
    #[serde(default)]
    pub content_ids: Vec<i32>,
}

/// Request to generate a brief with the LLM.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GenerateBriefDto {
    /// Free-text topic the brief should cover
    pub topic: String,
    /// Target content type, defaults to `blog_post`
    pub content_type: Option<String>,
    /// Contents to ground the brief on; defaults to the client's most
    /// recently analyzed contents
    pub content_ids: Option<Vec<i32>>,
}
