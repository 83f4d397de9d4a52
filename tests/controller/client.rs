//! Tests for the client endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use skald::{
    model::client::{ClientDto, CreateClientDto, UpdateAnalysisConfigDto},
    server::{
        controller::client::{create_client, delete_client, get_client, list_clients},
        data::analysis_config::AnalysisConfigRepository,
    },
};

use super::*;

fn create_request(name: &str) -> CreateClientDto {
    CreateClientDto {
        name: name.to_string(),
        description: None,
        niche: Some("outdoor gear".to_string()),
        target_audience: None,
    }
}

mod create {
    use super::*;

    /// Creating a client returns 201 with a generated ID
    #[tokio::test]
    async fn returns_created_client_with_generated_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;

        let result = create_client(
            State(test.to_app_state()),
            auth_user(),
            Json(create_request("Acme Outdoor")),
        )
        .await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: ClientDto = response_json(response).await;
        assert!(created.id > 0);
        assert_eq!(created.name, "Acme Outdoor");

        Ok(())
    }

    /// Missing tables surface as 500
    #[tokio::test]
    async fn error_when_tables_missing() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = create_client(
            State(test.to_app_state()),
            auth_user(),
            Json(create_request("Acme Outdoor")),
        )
        .await;

        assert!(result.is_err());
        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod list {
    use super::*;

    /// Listing returns every stored client
    #[tokio::test]
    async fn returns_all_clients() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        test.data().insert_mock_client().await?;
        test.data().insert_mock_client().await?;

        let result = list_clients(State(test.to_app_state()), auth_user()).await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let clients: Vec<ClientDto> = response_json(response).await;
        assert_eq!(clients.len(), 2);

        Ok(())
    }
}

mod get {
    use super::*;

    /// Fetching an unknown client returns 404
    #[tokio::test]
    async fn not_found_for_unknown_client() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;

        let result = get_client(State(test.to_app_state()), auth_user(), Path(999)).await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete {
    use super::*;

    /// Deleting a client cascades to its sources, contents, briefs, and
    /// analysis config
    #[tokio::test]
    async fn cascades_to_owned_rows() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;
        let source = test.data().insert_mock_source(client.id).await?;
        test.data().insert_mock_content(client.id, source.id).await?;
        test.data().insert_mock_brief(client.id).await?;
        AnalysisConfigRepository::new(&test.db)
            .upsert(
                client.id,
                UpdateAnalysisConfigDto {
                    min_content_length: 100,
                    topics: Vec::new(),
                    exclusion_patterns: Vec::new(),
                },
            )
            .await
            .unwrap();

        let result =
            delete_client(State(test.to_app_state()), auth_user(), Path(client.id)).await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        use sea_orm::EntityTrait;

        assert!(entity::prelude::Client::find().all(&test.db).await?.is_empty());
        assert!(entity::prelude::Source::find().all(&test.db).await?.is_empty());
        assert!(entity::prelude::Content::find().all(&test.db).await?.is_empty());
        assert!(entity::prelude::Brief::find().all(&test.db).await?.is_empty());
        assert!(entity::prelude::AnalysisConfig::find()
            .all(&test.db)
            .await?
            .is_empty());

        Ok(())
    }

    /// Deleting an unknown client returns 404
    #[tokio::test]
    async fn not_found_for_unknown_client() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;

        let result = delete_client(State(test.to_app_state()), auth_user(), Path(999)).await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
