use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Client {0} has no active sources to scrape")]
    NoActiveSources(i32),
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        match self {
            Self::NoActiveSources(client_id) => {
                tracing::debug!(client_id = %client_id, "{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new("No active sources to scrape for this client")),
                )
                    .into_response()
            }
        }
    }
}
