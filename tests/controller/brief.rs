//! Tests for the brief endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use skald::{
    model::brief::{
        BriefDto, BriefStatus, CreateBriefDto, GenerateBriefDto, GeneratedBy, UpdateBriefDto,
    },
    server::controller::brief::{create_brief, generate_brief, list_briefs, update_brief},
};

use super::*;

fn create_request() -> CreateBriefDto {
    CreateBriefDto {
        title: "Why layering beats one big jacket".to_string(),
        angle: None,
        key_points: vec!["Base layers".to_string()],
        content_type: "blog_post".to_string(),
        suggested_copy: None,
        content_ids: Vec::new(),
    }
}

mod create {
    use super::*;

    /// A manually created brief lands in draft status
    #[tokio::test]
    async fn returns_draft_brief() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;

        let result = create_brief(
            State(test.to_app_state()),
            auth_user(),
            Path(client.id),
            Json(create_request()),
        )
        .await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: BriefDto = response_json(response).await;
        assert_eq!(created.status, BriefStatus::Draft);
        assert_eq!(created.generated_by, GeneratedBy::Manual);

        Ok(())
    }

    /// Referencing unknown contents returns 400
    #[tokio::test]
    async fn bad_request_for_unknown_content_ids() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;

        let mut request = create_request();
        request.content_ids = vec![999];

        let result = create_brief(
            State(test.to_app_state()),
            auth_user(),
            Path(client.id),
            Json(request),
        )
        .await;

        assert!(result.is_err());
        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod generate {
    use super::*;

    /// A generation call always produces a draft row carrying the model's
    /// outline
    #[tokio::test]
    async fn returns_generated_draft() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;
        let source = test.data().insert_mock_source(client.id).await?;
        test.data().insert_mock_content(client.id, source.id).await?;

        let outline = r#"{"title":"Winter layering, explained","angle":"Practical over fashionable","key_points":["Base layers","Shells"],"suggested_copy":"Cold is a solvable problem."}"#;
        let endpoint = test.llm().with_completion_endpoint(outline, 1);

        let request = GenerateBriefDto {
            topic: "winter layering".to_string(),
            content_type: None,
            content_ids: None,
        };
        let result = generate_brief(
            State(test.to_app_state()),
            auth_user(),
            Path(client.id),
            Json(request),
        )
        .await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let generated: BriefDto = response_json(response).await;
        assert_eq!(generated.status, BriefStatus::Draft);
        assert_eq!(generated.generated_by, GeneratedBy::Openai);
        assert_eq!(generated.title, "Winter layering, explained");
        endpoint.assert();

        Ok(())
    }

    /// LLM failures surface as 502
    #[tokio::test]
    async fn bad_gateway_when_llm_unavailable() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;
        let source = test.data().insert_mock_source(client.id).await?;
        test.data().insert_mock_content(client.id, source.id).await?;

        let endpoint = test.llm().with_failing_completion_endpoint(1);

        let request = GenerateBriefDto {
            topic: "winter layering".to_string(),
            content_type: None,
            content_ids: None,
        };
        let result = generate_brief(
            State(test.to_app_state()),
            auth_user(),
            Path(client.id),
            Json(request),
        )
        .await;

        assert!(result.is_err());
        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        endpoint.assert();

        Ok(())
    }

    /// Generating for an unknown client returns 404
    #[tokio::test]
    async fn not_found_for_unknown_client() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;

        let request = GenerateBriefDto {
            topic: "anything".to_string(),
            content_type: None,
            content_ids: None,
        };
        let result = generate_brief(
            State(test.to_app_state()),
            auth_user(),
            Path(999),
            Json(request),
        )
        .await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod update {
    use super::*;

    /// Approving a draft persists the new status
    #[tokio::test]
    async fn approves_draft_brief() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let client = test.data().insert_mock_client().await?;
        let brief = test.data().insert_mock_brief(client.id).await?;

        let request = UpdateBriefDto {
            title: brief.title.clone(),
            angle: None,
            key_points: vec!["Base layers".to_string()],
            content_type: brief.content_type.clone(),
            suggested_copy: None,
            status: BriefStatus::Approved,
            content_ids: Vec::new(),
        };
        let result = update_brief(
            State(test.to_app_state()),
            auth_user(),
            Path(brief.id),
            Json(request),
        )
        .await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let updated: BriefDto = response_json(response).await;
        assert_eq!(updated.status, BriefStatus::Approved);

        Ok(())
    }
}

mod list {
    use super::*;

    /// Listing returns only the given client's briefs
    #[tokio::test]
    async fn returns_only_clients_briefs() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let client_a = test.data().insert_mock_client().await?;
        let client_b = test.data().insert_mock_client().await?;
        test.data().insert_mock_brief(client_a.id).await?;
        test.data().insert_mock_brief(client_b.id).await?;

        let result =
            list_briefs(State(test.to_app_state()), auth_user(), Path(client_a.id)).await;

        assert!(result.is_ok());
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let briefs: Vec<BriefDto> = response_json(response).await;
        assert_eq!(briefs.len(), 1);
        assert_eq!(briefs[0].client_id, client_a.id);

        Ok(())
    }
}
