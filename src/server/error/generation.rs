use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Api(#[from] async_openai::error::OpenAIError),
    #[error("Completion request timed out")]
    Timeout,
    #[error("Model returned an empty completion")]
    EmptyCompletion,
    #[error("Failed to parse model completion as a brief outline: {0}")]
    MalformedCompletion(String),
    #[error("Client {0} has no analyzed content to ground a brief on")]
    NoContent(i32),
}

impl IntoResponse for GenerationError {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent(client_id) => {
                tracing::debug!(client_id = %client_id, "{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new(
                        "No analyzed content available for this client; sync contents first",
                    )),
                )
                    .into_response()
            }
            err => {
                tracing::error!("Brief generation failed: {}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto::new("Brief generation failed")),
                )
                    .into_response()
            }
        }
    }
}
