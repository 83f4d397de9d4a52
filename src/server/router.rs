//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// Constructs an Axum router with the client, source, content, brief, and scraper-proxy
/// endpoints registered. Each endpoint is annotated with OpenAPI specifications via
/// utoipa, which are collected into a unified OpenAPI document served alongside Swagger
/// UI at `/api/docs`.
///
/// # Registered Endpoints
/// - `GET/POST /api/clients` - List and create clients
/// - `GET/PUT/DELETE /api/clients/{id}` - Fetch, overwrite, delete a client
/// - `GET/PUT /api/clients/{id}/analysis-config` - Per-client screening config
/// - `GET/POST /api/clients/{id}/sources` - List and attach feed sources
/// - `PUT/DELETE /api/sources/{id}` - Overwrite or delete a source
/// - `POST /api/sources/test` - Validate a feed URL via the scraper service
/// - `GET /api/clients/{id}/contents` - List scraped contents
/// - `POST /api/clients/{id}/contents/sync` - Import contents from the scraper service
/// - `GET/POST /api/clients/{id}/briefs` - List and create briefs
/// - `POST /api/clients/{id}/briefs/generate` - Generate a brief with the LLM
/// - `GET/PUT/DELETE /api/briefs/{id}` - Fetch, overwrite, delete a brief
/// - `POST /api/clients/{id}/scrape` - Start a scrape job
/// - `GET /api/scraper/tasks/{task_id}` - Poll a scrape job
/// - `GET /api/scraper/health` - Scraper service health
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged into the
/// main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Skald", description = "Skald API"), tags(
        (name = controller::client::CLIENT_TAG, description = "Client management API routes"),
        (name = controller::source::SOURCE_TAG, description = "Feed source API routes"),
        (name = controller::content::CONTENT_TAG, description = "Scraped content API routes"),
        (name = controller::brief::BRIEF_TAG, description = "Content brief API routes"),
        (name = controller::scraper::SCRAPER_TAG, description = "Scraper service proxy routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::client::list_clients,
            controller::client::create_client
        ))
        .routes(routes!(
            controller::client::get_client,
            controller::client::update_client,
            controller::client::delete_client
        ))
        .routes(routes!(
            controller::client::get_analysis_config,
            controller::client::update_analysis_config
        ))
        .routes(routes!(
            controller::source::list_sources,
            controller::source::create_source
        ))
        .routes(routes!(
            controller::source::update_source,
            controller::source::delete_source
        ))
        .routes(routes!(controller::source::test_source))
        .routes(routes!(controller::content::list_contents))
        .routes(routes!(controller::content::sync_contents))
        .routes(routes!(
            controller::brief::list_briefs,
            controller::brief::create_brief
        ))
        .routes(routes!(controller::brief::generate_brief))
        .routes(routes!(
            controller::brief::get_brief,
            controller::brief::update_brief,
            controller::brief::delete_brief
        ))
        .routes(routes!(controller::scraper::start_scrape))
        .routes(routes!(controller::scraper::task_status))
        .routes(routes!(controller::scraper::health))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
