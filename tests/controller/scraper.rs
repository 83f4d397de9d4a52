//! Tests for the scraper proxy endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use skald::{
    model::scraper::ScrapeTaskDto,
    server::controller::scraper::{health, start_scrape, task_status},
};

use super::*;

mod start {
    use super::*;

    /// Starting a scrape for a client with active sources returns 202
    #[tokio::test]
    async fn accepted_with_task() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;
        test.data().insert_mock_source(client.id).await?;

        let endpoint = test.scraper().with_scrape_endpoint("task-9", 1);

        let result =
            start_scrape(State(test.to_app_state()), auth_user(), Path(client.id)).await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let task: ScrapeTaskDto = response_json(response).await;
        assert_eq!(task.task_id, "task-9");
        assert_eq!(task.status, "pending");
        endpoint.assert();

        Ok(())
    }

    /// A client without active sources gets a 400
    #[tokio::test]
    async fn bad_request_without_active_sources() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;

        let result =
            start_scrape(State(test.to_app_state()), auth_user(), Path(client.id)).await;

        assert!(result.is_err());
        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// An unknown client gets a 404
    #[tokio::test]
    async fn not_found_for_unknown_client() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;

        let result = start_scrape(State(test.to_app_state()), auth_user(), Path(999)).await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod status {
    use super::*;

    /// Polling passes the scraper's task snapshot through
    #[tokio::test]
    async fn passes_task_through() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;

        let endpoint = test.scraper().with_task_endpoint("task-9", "completed", 1);

        let result = task_status(
            State(test.to_app_state()),
            auth_user(),
            Path("task-9".to_string()),
        )
        .await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let task: ScrapeTaskDto = response_json(response).await;
        assert_eq!(task.status, "completed");
        endpoint.assert();

        Ok(())
    }
}

mod service_health {
    use super::*;

    /// A healthy scraper reports through
    #[tokio::test]
    async fn reports_healthy_service() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;

        let endpoint = test.scraper().with_health_endpoint("ok", 1);

        let result = health(State(test.to_app_state()), auth_user()).await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);
        endpoint.assert();

        Ok(())
    }

    /// A down scraper surfaces as 502
    #[tokio::test]
    async fn bad_gateway_when_unavailable() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;

        let endpoint = test.scraper().with_failing_endpoint("GET", "/health", 1);

        let result = health(State(test.to_app_state()), auth_user()).await;

        assert!(result.is_err());
        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        endpoint.assert();

        Ok(())
    }
}
