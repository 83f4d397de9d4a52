//! Tests for the source endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use skald::{
    model::source::{CreateSourceDto, SourceDto, SourceType},
    server::controller::source::{create_source, list_sources},
};

use super::*;

fn create_request() -> CreateSourceDto {
    CreateSourceDto {
        name: "Acme Blog".to_string(),
        url: "https://acme.example.com/feed.xml".to_string(),
        source_type: SourceType::Rss,
    }
}

mod create {
    use super::*;

    /// Attaching a source to an existing client returns 201
    #[tokio::test]
    async fn returns_created_source() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;

        let result = create_source(
            State(test.to_app_state()),
            auth_user(),
            Path(client.id),
            Json(create_request()),
        )
        .await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: SourceDto = response_json(response).await;
        assert_eq!(created.client_id, client.id);
        assert!(created.active);

        Ok(())
    }

    /// Attaching a source to an unknown client returns 404
    #[tokio::test]
    async fn not_found_for_unknown_client() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;

        let result = create_source(
            State(test.to_app_state()),
            auth_user(),
            Path(999),
            Json(create_request()),
        )
        .await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod list {
    use super::*;

    /// Listing returns only the given client's sources
    #[tokio::test]
    async fn returns_only_clients_sources() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let client_a = test.data().insert_mock_client().await?;
        let client_b = test.data().insert_mock_client().await?;
        test.data().insert_mock_source(client_a.id).await?;
        test.data().insert_mock_source(client_a.id).await?;
        test.data().insert_mock_source(client_b.id).await?;

        let result =
            list_sources(State(test.to_app_state()), auth_user(), Path(client_a.id)).await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let sources: Vec<SourceDto> = response_json(response).await;
        assert_eq!(sources.len(), 2);
        assert!(sources.iter().all(|source| source.client_id == client_a.id));

        Ok(())
    }
}
