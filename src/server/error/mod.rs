//! Error types for the Skald server application.
//!
//! Specialized error types for each domain (authentication, configuration, briefs,
//! generation, scraping) aggregate into a single [`Error`] used by handlers. All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic
//! error definitions.

pub mod auth;
pub mod brief;
pub mod config;
pub mod generation;
pub mod scrape;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, brief::BriefError, config::ConfigError, generation::GenerationError,
        scrape::ScrapeError,
    },
};

/// Main error type for the Skald server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// unified error type, with `#[from]` conversions so handlers can use the `?` operator
/// throughout. The `IntoResponse` implementation maps each error to its HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing or invalid bearer token).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Brief validation error (bad content references).
    #[error(transparent)]
    BriefError(#[from] BriefError),
    /// Brief generation error (LLM request or completion parsing).
    #[error(transparent)]
    GenerationError(#[from] GenerationError),
    /// Scrape orchestration error (no sources to scrape).
    #[error(transparent)]
    ScrapeError(#[from] ScrapeError),
    /// Scraper service error (request failure or unexpected upstream status).
    #[error(transparent)]
    ScraperError(#[from] scraper_client::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Skald's code.
    ///
    /// This error should never occur in normal operation and indicates a programming
    /// error that needs to be reported as a GitHub issue.
    #[error("Internal error with Skald's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mappings; scraper-service failures become
/// 502 Bad Gateway so upstream trouble is distinguishable from our own, and everything
/// else falls back to a logged 500 with a generic message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::BriefError(err) => err.into_response(),
            Self::GenerationError(err) => err.into_response(),
            Self::ScrapeError(err) => err.into_response(),
            Self::ScraperError(err) => {
                tracing::error!("Scraper service request failed: {}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto::new("Scraper service unavailable")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error
/// response.
///
/// Logs the full error message server-side and returns a generic message to the client
/// so persistence and upstream details are never leaked in response bodies.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
