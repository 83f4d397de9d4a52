//! Conversions between entity models, scraper-service types, and the shared DTOs.

use scraper_client::model::{Health, ScrapeTask, SourceKind, TaskStatus, TestSourceResult};

use crate::model::{
    brief::{BriefDto, BriefStatus, GeneratedBy},
    client::{AnalysisConfigDto, ClientDto},
    content::ContentDto,
    scraper::{ScrapeTaskDto, ScraperHealthDto},
    source::{SourceDto, SourceType, TestSourceResultDto},
};

/// Decodes a JSON column holding a list of strings, tolerating legacy rows.
pub fn string_list(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

/// Decodes a JSON column holding a list of content IDs.
pub fn id_list(value: serde_json::Value) -> Vec<i32> {
    serde_json::from_value(value).unwrap_or_default()
}

impl From<entity::client::Model> for ClientDto {
    fn from(model: entity::client::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            niche: model.niche,
            target_audience: model.target_audience,
            created_at: model.created_at,
        }
    }
}

impl From<entity::analysis_config::Model> for AnalysisConfigDto {
    fn from(model: entity::analysis_config::Model) -> Self {
        Self {
            min_content_length: model.min_content_length,
            topics: string_list(model.topics),
            exclusion_patterns: string_list(model.exclusion_patterns),
            updated_at: model.updated_at,
        }
    }
}

impl From<entity::source::Model> for SourceDto {
    fn from(model: entity::source::Model) -> Self {
        Self {
            id: model.id,
            client_id: model.client_id,
            name: model.name,
            url: model.url,
            source_type: model.source_type.into(),
            active: model.active,
            last_scraped_at: model.last_scraped_at,
            created_at: model.created_at,
        }
    }
}

impl From<entity::content::Model> for ContentDto {
    fn from(model: entity::content::Model) -> Self {
        Self {
            id: model.id,
            source_id: model.source_id,
            client_id: model.client_id,
            title: model.title,
            url: model.url,
            body: model.body,
            summary: model.summary,
            topics: string_list(model.topics),
            published_at: model.published_at,
            scraped_at: model.scraped_at,
            analyzed: model.analyzed,
        }
    }
}

impl From<entity::brief::Model> for BriefDto {
    fn from(model: entity::brief::Model) -> Self {
        Self {
            id: model.id,
            client_id: model.client_id,
            content_ids: id_list(model.content_ids),
            title: model.title,
            angle: model.angle,
            key_points: string_list(model.key_points),
            content_type: model.content_type,
            suggested_copy: model.suggested_copy,
            status: model.status.into(),
            generated_by: model.generated_by.into(),
            created_at: model.created_at,
        }
    }
}

impl From<entity::source::SourceType> for SourceType {
    fn from(source_type: entity::source::SourceType) -> Self {
        match source_type {
            entity::source::SourceType::Rss => Self::Rss,
            entity::source::SourceType::Blog => Self::Blog,
            entity::source::SourceType::News => Self::News,
            entity::source::SourceType::Youtube => Self::Youtube,
        }
    }
}

impl From<SourceType> for entity::source::SourceType {
    fn from(source_type: SourceType) -> Self {
        match source_type {
            SourceType::Rss => Self::Rss,
            SourceType::Blog => Self::Blog,
            SourceType::News => Self::News,
            SourceType::Youtube => Self::Youtube,
        }
    }
}

impl From<SourceType> for SourceKind {
    fn from(source_type: SourceType) -> Self {
        match source_type {
            SourceType::Rss => Self::Rss,
            SourceType::Blog => Self::Blog,
            SourceType::News => Self::News,
            SourceType::Youtube => Self::Youtube,
        }
    }
}

impl From<entity::brief::BriefStatus> for BriefStatus {
    fn from(status: entity::brief::BriefStatus) -> Self {
        match status {
            entity::brief::BriefStatus::Draft => Self::Draft,
            entity::brief::BriefStatus::Approved => Self::Approved,
            entity::brief::BriefStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<BriefStatus> for entity::brief::BriefStatus {
    fn from(status: BriefStatus) -> Self {
        match status {
            BriefStatus::Draft => Self::Draft,
            BriefStatus::Approved => Self::Approved,
            BriefStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<entity::brief::GeneratedBy> for GeneratedBy {
    fn from(generated_by: entity::brief::GeneratedBy) -> Self {
        match generated_by {
            entity::brief::GeneratedBy::Manual => Self::Manual,
            entity::brief::GeneratedBy::Claude => Self::Claude,
            entity::brief::GeneratedBy::Openai => Self::Openai,
        }
    }
}

impl From<GeneratedBy> for entity::brief::GeneratedBy {
    fn from(generated_by: GeneratedBy) -> Self {
        match generated_by {
            GeneratedBy::Manual => Self::Manual,
            GeneratedBy::Claude => Self::Claude,
            GeneratedBy::Openai => Self::Openai,
        }
    }
}

impl From<ScrapeTask> for ScrapeTaskDto {
    fn from(task: ScrapeTask) -> Self {
        let status = match task.status {
            TaskStatus::Pending => "pending",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        };

        Self {
            task_id: task.task_id,
            status: status.to_string(),
            total_items: task.total_items,
            processed_items: task.processed_items,
            error: task.error,
        }
    }
}

impl From<Health> for ScraperHealthDto {
    fn from(health: Health) -> Self {
        Self {
            status: health.status,
            version: health.version,
        }
    }
}

impl From<TestSourceResult> for TestSourceResultDto {
    fn from(result: TestSourceResult) -> Self {
        Self {
            ok: result.ok,
            item_count: result.item_count,
            sample_titles: result.sample_titles,
            message: result.message,
        }
    }
}
