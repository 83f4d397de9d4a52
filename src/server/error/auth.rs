use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request carries no bearer token or session cookie")]
    MissingToken,
    #[error("Bearer token failed validation")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => {
                tracing::debug!("{}", Self::MissingToken);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::new("Authentication required")),
                )
                    .into_response()
            }
            Self::InvalidToken => {
                tracing::debug!("{}", Self::InvalidToken);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::new("Invalid or expired token")),
                )
                    .into_response()
            }
        }
    }
}
