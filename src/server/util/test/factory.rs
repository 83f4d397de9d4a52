//! Factories for request payloads and scraper items used across the test
//! suites.

use scraper_client::model::ScrapedItem;

use crate::{
    model::{
        brief::CreateBriefDto,
        client::CreateClientDto,
        source::{CreateSourceDto, SourceType},
    },
    server::data::brief::NewBrief,
};

/// Create-client payload with default test values.
pub fn create_client_dto() -> CreateClientDto {
    CreateClientDto {
        name: "Acme Outdoor".to_string(),
        description: Some("Outdoor gear brand".to_string()),
        niche: Some("outdoor gear".to_string()),
        target_audience: Some("weekend hikers".to_string()),
    }
}

/// Create-source payload with default test values.
pub fn create_source_dto() -> CreateSourceDto {
    CreateSourceDto {
        name: "Acme Blog".to_string(),
        url: "https://acme.example.com/feed.xml".to_string(),
        source_type: SourceType::Rss,
    }
}

/// Create-brief payload with default test values.
pub fn create_brief_dto() -> CreateBriefDto {
    CreateBriefDto {
        title: "Why layering beats one big jacket".to_string(),
        angle: Some("Practical over fashionable".to_string()),
        key_points: vec!["Base layers".to_string(), "Shells".to_string()],
        content_type: "blog_post".to_string(),
        suggested_copy: None,
        content_ids: Vec::new(),
    }
}

/// Repository-level brief fields for a manual draft.
pub fn new_brief() -> NewBrief {
    NewBrief {
        title: "Why layering beats one big jacket".to_string(),
        angle: Some("Practical over fashionable".to_string()),
        key_points: vec!["Base layers".to_string(), "Shells".to_string()],
        content_type: "blog_post".to_string(),
        suggested_copy: None,
        content_ids: Vec::new(),
        status: entity::brief::BriefStatus::Draft,
        generated_by: entity::brief::GeneratedBy::Manual,
    }
}

/// Scraped item keyed so URLs stay distinct within a test.
pub fn scraped_item(key: &str) -> ScrapedItem {
    ScrapedItem {
        title: format!("Trail review {}", key),
        url: format!("https://acme.example.com/posts/{}", key),
        body: Some("A long-form review of this season's trail running shoes.".to_string()),
        summary: Some("Season roundup of trail shoes.".to_string()),
        topics: vec!["gear".to_string()],
        published_at: None,
        source_url: None,
    }
}

/// Scraped item attributed to a specific feed URL.
pub fn scraped_item_from(source_url: &str, key: &str) -> ScrapedItem {
    ScrapedItem {
        source_url: Some(source_url.to_string()),
        ..scraped_item(key)
    }
}
