use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        scraper::{ScrapeTaskDto, ScraperHealthDto},
    },
    server::{
        data::client::ClientRepository,
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::scrape::ScrapeService,
    },
};

pub static SCRAPER_TAG: &str = "scraper";

/// Check the scraper service's health
#[utoipa::path(
    get,
    path = "/api/scraper/health",
    tag = SCRAPER_TAG,
    responses(
        (status = 200, description = "Scraper service health", body = ScraperHealthDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 502, description = "Scraper service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn health(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let health = state.scraper.health().await?;

    Ok((StatusCode::OK, Json(ScraperHealthDto::from(health))).into_response())
}

/// Start a scrape job for a client's active sources
#[utoipa::path(
    post,
    path = "/api/clients/{id}/scrape",
    tag = SCRAPER_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 202, description = "Scrape job accepted", body = ScrapeTaskDto),
        (status = 400, description = "Client has no active sources", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 502, description = "Scraper service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_scrape(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);
    let scrape_service = ScrapeService::new(&state.db, &state.scraper);

    if client_repository.get(client_id).await?.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    }

    let task = scrape_service.start_for_client(client_id).await?;

    Ok((StatusCode::ACCEPTED, Json(ScrapeTaskDto::from(task))).into_response())
}

/// Poll a scrape job's status
#[utoipa::path(
    get,
    path = "/api/scraper/tasks/{task_id}",
    tag = SCRAPER_TAG,
    params(("task_id" = String, Path, description = "Scrape task ID")),
    responses(
        (status = 200, description = "Scrape job status", body = ScrapeTaskDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 502, description = "Scraper service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn task_status(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(task_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let task = state.scraper.task(&task_id).await?;

    Ok((StatusCode::OK, Json(ScrapeTaskDto::from(task))).into_response())
}
