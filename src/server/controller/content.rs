use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        content::{ContentDto, SyncReportDto},
    },
    server::{
        data::{client::ClientRepository, content::ContentRepository},
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::content::ContentSyncService,
    },
};

pub static CONTENT_TAG: &str = "content";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ContentListQuery {
    /// Restrict to analyzed (or unanalyzed) contents
    pub analyzed: Option<bool>,
}

/// List a client's contents, newest first
#[utoipa::path(
    get,
    path = "/api/clients/{id}/contents",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID"),
        ContentListQuery
    ),
    responses(
        (status = 200, description = "Success when listing the client's contents", body = Vec<ContentDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_contents(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
    Query(query): Query<ContentListQuery>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);
    let content_repository = ContentRepository::new(&state.db);

    if client_repository.get(client_id).await?.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    }

    let contents = content_repository
        .list_by_client(client_id, query.analyzed)
        .await?;
    let content_dtos: Vec<ContentDto> = contents.into_iter().map(ContentDto::from).collect();

    Ok((StatusCode::OK, Json(content_dtos)).into_response())
}

/// Pull the client's scraped contents from the scraper service
///
/// Items are screened against the client's analysis config; re-running a sync
/// never duplicates rows.
#[utoipa::path(
    post,
    path = "/api/clients/{id}/contents/sync",
    tag = CONTENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Sync finished", body = SyncReportDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 502, description = "Scraper service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_contents(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);
    let sync_service = ContentSyncService::new(&state.db, &state.scraper);

    if client_repository.get(client_id).await?.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    }

    let outcome = sync_service.sync_client(client_id).await?;

    Ok((
        StatusCode::OK,
        Json(SyncReportDto {
            fetched: outcome.fetched,
            imported: outcome.imported,
            skipped: outcome.skipped,
        }),
    )
        .into_response())
}
