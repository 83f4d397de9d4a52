use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        brief::{BriefDto, CreateBriefDto, GenerateBriefDto, UpdateBriefDto},
    },
    server::{
        data::{brief::BriefRepository, client::ClientRepository},
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::{brief::BriefService, generation::GenerationService},
    },
};

pub static BRIEF_TAG: &str = "brief";

/// List a client's briefs, newest first
#[utoipa::path(
    get,
    path = "/api/clients/{id}/briefs",
    tag = BRIEF_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Success when listing the client's briefs", body = Vec<BriefDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_briefs(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);
    let brief_repository = BriefRepository::new(&state.db);

    if client_repository.get(client_id).await?.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    }

    let briefs = brief_repository.list_by_client(client_id).await?;
    let brief_dtos: Vec<BriefDto> = briefs.into_iter().map(BriefDto::from).collect();

    Ok((StatusCode::OK, Json(brief_dtos)).into_response())
}

/// Create a brief by hand
///
/// The brief starts in draft status; any referenced content IDs must belong to
/// the client.
#[utoipa::path(
    post,
    path = "/api/clients/{id}/briefs",
    tag = BRIEF_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    request_body = CreateBriefDto,
    responses(
        (status = 201, description = "Brief created", body = BriefDto),
        (status = 400, description = "Referenced contents do not exist for this client", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_brief(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
    Json(brief): Json<CreateBriefDto>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);
    let brief_service = BriefService::new(&state.db);

    if client_repository.get(client_id).await?.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    }

    let created = brief_service.create_manual(client_id, brief).await?;

    Ok((StatusCode::CREATED, Json(BriefDto::from(created))).into_response())
}

/// Generate a brief with the LLM
///
/// Grounded on the given content IDs, or the client's most recently analyzed
/// contents when none are given. Always produces a draft.
#[utoipa::path(
    post,
    path = "/api/clients/{id}/briefs/generate",
    tag = BRIEF_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    request_body = GenerateBriefDto,
    responses(
        (status = 201, description = "Brief generated", body = BriefDto),
        (status = 400, description = "No grounding content available, or referenced contents do not exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 502, description = "Generation service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_brief(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
    Json(request): Json<GenerateBriefDto>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);
    let generation_service = GenerationService::new(&state.db, &state.llm, &state.llm_model);

    let client = if let Some(client) = client_repository.get(client_id).await? {
        client
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    };

    let generated = generation_service.generate(&client, request).await?;

    Ok((StatusCode::CREATED, Json(BriefDto::from(generated))).into_response())
}

/// Get a single brief
#[utoipa::path(
    get,
    path = "/api/briefs/{id}",
    tag = BRIEF_TAG,
    params(("id" = i32, Path, description = "Brief ID")),
    responses(
        (status = 200, description = "Success when retrieving the brief", body = BriefDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Brief not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brief(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(brief_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let brief_repository = BriefRepository::new(&state.db);

    let brief = if let Some(brief) = brief_repository.get(brief_id).await? {
        brief
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Brief not found")),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(BriefDto::from(brief))).into_response())
}

/// Overwrite a brief, including its review status
#[utoipa::path(
    put,
    path = "/api/briefs/{id}",
    tag = BRIEF_TAG,
    params(("id" = i32, Path, description = "Brief ID")),
    request_body = UpdateBriefDto,
    responses(
        (status = 200, description = "Brief updated", body = BriefDto),
        (status = 400, description = "Referenced contents do not exist for this client", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Brief not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_brief(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(brief_id): Path<i32>,
    Json(brief): Json<UpdateBriefDto>,
) -> Result<impl IntoResponse, Error> {
    let brief_service = BriefService::new(&state.db);

    let updated = if let Some(updated) = brief_service.update(brief_id, brief).await? {
        updated
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Brief not found")),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(BriefDto::from(updated))).into_response())
}

/// Delete a brief
#[utoipa::path(
    delete,
    path = "/api/briefs/{id}",
    tag = BRIEF_TAG,
    params(("id" = i32, Path, description = "Brief ID")),
    responses(
        (status = 204, description = "Brief deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Brief not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_brief(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(brief_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let brief_repository = BriefRepository::new(&state.db);

    let result = brief_repository.delete(brief_id).await?;

    if result.rows_affected == 0 {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Brief not found")),
        )
            .into_response());
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
