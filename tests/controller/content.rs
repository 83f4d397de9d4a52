//! Tests for the content endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use scraper_client::model::ScrapedItem;
use skald::{
    model::content::{ContentDto, SyncReportDto},
    server::controller::content::{list_contents, sync_contents, ContentListQuery},
};

use super::*;

fn scraped_item(source_url: &str, key: &str) -> ScrapedItem {
    ScrapedItem {
        title: format!("Trail review {}", key),
        url: format!("https://acme.example.com/posts/{}", key),
        body: Some("A long-form review of this season's trail running shoes.".to_string()),
        summary: None,
        topics: vec!["gear".to_string()],
        published_at: None,
        source_url: Some(source_url.to_string()),
    }
}

mod list {
    use super::*;

    /// Listing returns only the given client's contents
    #[tokio::test]
    async fn returns_only_clients_contents() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let client_a = test.data().insert_mock_client().await?;
        let client_b = test.data().insert_mock_client().await?;
        let source_a = test.data().insert_mock_source(client_a.id).await?;
        let source_b = test.data().insert_mock_source(client_b.id).await?;
        test.data()
            .insert_mock_content(client_a.id, source_a.id)
            .await?;
        test.data()
            .insert_mock_content(client_b.id, source_b.id)
            .await?;

        let result = list_contents(
            State(test.to_app_state()),
            auth_user(),
            Path(client_a.id),
            Query(ContentListQuery { analyzed: None }),
        )
        .await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let contents: Vec<ContentDto> = response_json(response).await;
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].client_id, client_a.id);

        Ok(())
    }

    /// Listing an unknown client returns 404
    #[tokio::test]
    async fn not_found_for_unknown_client() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;

        let result = list_contents(
            State(test.to_app_state()),
            auth_user(),
            Path(999),
            Query(ContentListQuery { analyzed: None }),
        )
        .await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod sync {
    use super::*;

    /// Syncing imports the scraper service's items and reports the counts
    #[tokio::test]
    async fn imports_items_and_reports_counts() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;
        let source = test.data().insert_mock_source(client.id).await?;

        let items = vec![
            scraped_item(&source.url, "a"),
            scraped_item(&source.url, "b"),
        ];
        let endpoint = test
            .scraper()
            .with_client_contents_endpoint(client.id, &items, 1);

        let result =
            sync_contents(State(test.to_app_state()), auth_user(), Path(client.id)).await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let report: SyncReportDto = response_json(response).await;
        assert_eq!(report.fetched, 2);
        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped, 0);
        endpoint.assert();

        Ok(())
    }

    /// Scraper failures surface as 502, not 500
    #[tokio::test]
    async fn bad_gateway_when_scraper_unavailable() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;

        let path = format!("/clients/{}/contents", client.id);
        let endpoint = test.scraper().with_failing_endpoint("GET", &path, 1);

        let result =
            sync_contents(State(test.to_app_state()), auth_user(), Path(client.id)).await;

        assert!(result.is_err());
        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        endpoint.assert();

        Ok(())
    }
}
