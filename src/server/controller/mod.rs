//! HTTP controller endpoints for the Skald web API.
//!
//! Axum handlers for client, source, content, brief, and scraper-proxy routes.
//! Controllers validate inputs, enforce bearer-token authentication through the
//! [`AuthUser`](crate::server::model::auth::AuthUser) extractor, delegate to
//! repositories and services, and map results to HTTP responses. All endpoints
//! carry utoipa annotations for the generated OpenAPI document.

pub mod brief;
pub mod client;
pub mod content;
pub mod scraper;
pub mod source;
