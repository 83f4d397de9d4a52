use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        client::{
            AnalysisConfigDto, ClientDto, CreateClientDto, UpdateAnalysisConfigDto,
            UpdateClientDto,
        },
    },
    server::{
        data::{analysis_config::AnalysisConfigRepository, client::ClientRepository},
        error::Error,
        model::{app::AppState, auth::AuthUser},
    },
};

pub static CLIENT_TAG: &str = "client";

/// List all clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Success when listing clients", body = Vec<ClientDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_clients(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);

    let clients = client_repository.list().await?;
    let client_dtos: Vec<ClientDto> = clients.into_iter().map(ClientDto::from).collect();

    Ok((StatusCode::OK, Json(client_dtos)).into_response())
}

/// Create a new client
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Client created", body = ClientDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(client): Json<CreateClientDto>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);

    let created = client_repository.create(client).await?;

    Ok((StatusCode::CREATED, Json(ClientDto::from(created))).into_response())
}

/// Get a single client
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Success when retrieving the client", body = ClientDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);

    let client = if let Some(client) = client_repository.get(client_id).await? {
        client
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(ClientDto::from(client))).into_response())
}

/// Overwrite a client's profile
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Client updated", body = ClientDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
    Json(client): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);

    let updated = if let Some(updated) = client_repository.update(client_id, client).await? {
        updated
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(ClientDto::from(updated))).into_response())
}

/// Delete a client and everything it owns
///
/// Sources, contents, briefs, and the analysis config cascade away with the
/// client row.
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);

    let result = client_repository.delete(client_id).await?;

    if result.rows_affected == 0 {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Get a client's analysis config
#[utoipa::path(
    get,
    path = "/api/clients/{id}/analysis-config",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Success when retrieving the analysis config", body = AnalysisConfigDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client or config not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analysis_config(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);
    let config_repository = AnalysisConfigRepository::new(&state.db);

    if client_repository.get(client_id).await?.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    }

    let config = if let Some(config) = config_repository.get_by_client(client_id).await? {
        config
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Analysis config not set for this client")),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(AnalysisConfigDto::from(config))).into_response())
}

/// Create or overwrite a client's analysis config
#[utoipa::path(
    put,
    path = "/api/clients/{id}/analysis-config",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    request_body = UpdateAnalysisConfigDto,
    responses(
        (status = 200, description = "Analysis config stored", body = AnalysisConfigDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_analysis_config(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
    Json(config): Json<UpdateAnalysisConfigDto>,
) -> Result<impl IntoResponse, Error> {
    let client_repository = ClientRepository::new(&state.db);
    let config_repository = AnalysisConfigRepository::new(&state.db);

    if client_repository.get(client_id).await?.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Client not found")),
        )
            .into_response());
    }

    let stored = config_repository.upsert(client_id, config).await?;

    Ok((StatusCode::OK, Json(AnalysisConfigDto::from(stored))).into_response())
}
