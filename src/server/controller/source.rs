use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        source::{
            CreateSourceDto, SourceDto, TestSourceDto, TestSourceResultDto, UpdateSourceDto,
        },
    },
    server::{
        data::{client::ClientRepository, source::SourceRepository},
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::scrape::ScrapeService,
    },
};

pub static SOURCE_TAG: &str = "source";

/// List a client's sources
#[utoipa::path(
    get,
    path = "/api/clients/{id}/sources",
    tag = SOURCE_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Success when listing the client's sources", body = Vec<SourceDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sources(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);
    let source_repository = SourceRepository::new(&state.db);

    if client_repository.get(client_id).await?.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    }

    let sources = source_repository.list_by_client(client_id).await?;
    let source_dtos: Vec<SourceDto> = sources.into_iter().map(SourceDto::from).collect();

    Ok((StatusCode::OK, Json(source_dtos)).into_response())
}

/// Attach a new source to a client
#[utoipa::path(
    post,
    path = "/api/clients/{id}/sources",
    tag = SOURCE_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    request_body = CreateSourceDto,
    responses(
        (status = 201, description = "Source created", body = SourceDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_source(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
    Json(source): Json<CreateSourceDto>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);
    let source_repository = SourceRepository::new(&state.db);

    if client_repository.get(client_id).await?.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    }

    let created = source_repository.create(client_id, source).await?;

    Ok((StatusCode::CREATED, Json(SourceDto::from(created))).into_response())
}

/// Overwrite a source
#[utoipa::path(
    put,
    path = "/api/sources/{id}",
    tag = SOURCE_TAG,
    params(("id" = i32, Path, description = "Source ID")),
    request_body = UpdateSourceDto,
    responses(
        (status = 200, description = "Source updated", body = SourceDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Source not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_source(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(source_id): Path<i32>,
    Json(source): Json<UpdateSourceDto>,
) -> Result<impl IntoResponse, Error> {
    let source_repository = SourceRepository::new(&state.db);

    let updated = if let Some(updated) = source_repository.update(source_id, source).await? {
        updated
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Source not found")),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(SourceDto::from(updated))).into_response())
}

/// Delete a source and its contents
#[utoipa::path(
    delete,
    path = "/api/sources/{id}",
    tag = SOURCE_TAG,
    params(("id" = i32, Path, description = "Source ID")),
    responses(
        (status = 204, description = "Source deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Source not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_source(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(source_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let source_repository = SourceRepository::new(&state.db);

    let result = source_repository.delete(source_id).await?;

    if result.rows_affected == 0 {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Source not found")),
        )
            .into_response());
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Validate a feed URL against the scraper service
///
/// Nothing is persisted; this backs the "test source" button in the source
/// form.
#[utoipa::path(
    post,
    path = "/api/sources/test",
    tag = SOURCE_TAG,
    request_body = TestSourceDto,
    responses(
        (status = 200, description = "Validation verdict from the scraper service", body = TestSourceResultDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 502, description = "Scraper service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn test_source(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(request): Json<TestSourceDto>,
) -> Result<impl IntoResponse, Error> {
    let scrape_service = ScrapeService::new(&state.db, &state.scraper);

    let result = scrape_service.test_source(request).await?;

    Ok((StatusCode::OK, Json(TestSourceResultDto::from(result))).into_response())
}
