//! Fetch helpers wrapping the REST API for the web client.

#[cfg(feature = "web")]
use serde::de::DeserializeOwned;

#[cfg(feature = "web")]
use crate::model::{
    brief::{BriefDto, GenerateBriefDto, UpdateBriefDto},
    client::{ClientDto, CreateClientDto},
    content::{ContentDto, SyncReportDto},
    scraper::ScrapeTaskDto,
    source::{CreateSourceDto, SourceDto, TestSourceDto, TestSourceResultDto},
};

#[cfg(feature = "web")]
async fn parse_response<T: DeserializeOwned>(
    response: reqwasm::http::Response,
) -> Result<T, String> {
    use crate::model::api::ErrorDto;

    if (200..300).contains(&response.status()) {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));
    }

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        Err(format!(
            "Request failed with status {}: {}",
            response.status(),
            error_dto.error
        ))
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(format!(
            "Request failed with status {}: {}",
            response.status(),
            error_text
        ))
    }
}

#[cfg(feature = "web")]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    use reqwasm::http::Request;

    let response = Request::get(path)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

#[cfg(feature = "web")]
async fn send_json<B: serde::Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: &B,
) -> Result<T, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;

    let request = match method {
        "PUT" => Request::put(path),
        _ => Request::post(path),
    };

    let response = request
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

#[cfg(feature = "web")]
async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    use reqwasm::http::Request;

    let response = Request::post(path)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

/// Retrieve all clients from the API
#[cfg(feature = "web")]
pub async fn get_clients() -> Result<Vec<ClientDto>, String> {
    get_json("/api/clients").await
}

/// Create a client
#[cfg(feature = "web")]
pub async fn create_client(client: &CreateClientDto) -> Result<ClientDto, String> {
    send_json("POST", "/api/clients", client).await
}

/// Retrieve a client's sources
#[cfg(feature = "web")]
pub async fn get_sources(client_id: i32) -> Result<Vec<SourceDto>, String> {
    get_json(&format!("/api/clients/{}/sources", client_id)).await
}

/// Attach a source to a client
#[cfg(feature = "web")]
pub async fn create_source(client_id: i32, source: &CreateSourceDto) -> Result<SourceDto, String> {
    send_json("POST", &format!("/api/clients/{}/sources", client_id), source).await
}

/// Validate a feed URL against the scraper service
#[cfg(feature = "web")]
pub async fn test_source(request: &TestSourceDto) -> Result<TestSourceResultDto, String> {
    send_json("POST", "/api/sources/test", request).await
}

/// Start a scrape job for a client's active sources
#[cfg(feature = "web")]
pub async fn start_scrape(client_id: i32) -> Result<ScrapeTaskDto, String> {
    post_empty(&format!("/api/clients/{}/scrape", client_id)).await
}

/// Retrieve a client's contents
#[cfg(feature = "web")]
pub async fn get_contents(client_id: i32) -> Result<Vec<ContentDto>, String> {
    get_json(&format!("/api/clients/{}/contents", client_id)).await
}

/// Pull the client's scraped contents into the content table
#[cfg(feature = "web")]
pub async fn sync_contents(client_id: i32) -> Result<SyncReportDto, String> {
    post_empty(&format!("/api/clients/{}/contents/sync", client_id)).await
}

/// Retrieve a client's briefs
#[cfg(feature = "web")]
pub async fn get_briefs(client_id: i32) -> Result<Vec<BriefDto>, String> {
    get_json(&format!("/api/clients/{}/briefs", client_id)).await
}

/// Generate a brief for a client with the LLM
#[cfg(feature = "web")]
pub async fn generate_brief(
    client_id: i32,
    request: &GenerateBriefDto,
) -> Result<BriefDto, String> {
    send_json(
        "POST",
        &format!("/api/clients/{}/briefs/generate", client_id),
        request,
    )
    .await
}

/// Overwrite a brief, including its review status
#[cfg(feature = "web")]
pub async fn update_brief(brief_id: i32, brief: &UpdateBriefDto) -> Result<BriefDto, String> {
    send_json("PUT", &format!("/api/briefs/{}", brief_id), brief).await
}
