use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum BriefError {
    #[error("Content IDs {0:?} do not exist for this client")]
    UnknownContentIds(Vec<i32>),
}

impl IntoResponse for BriefError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownContentIds(ref ids) => {
                tracing::debug!(content_ids = ?ids, "{}", self);

                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
            }
        }
    }
}
