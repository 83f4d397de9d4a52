//! Tests for the bearer-token extractor.
//!
//! The `AuthUser` extractor guards every API handler; these tests exercise it
//! directly against crafted request parts.

use axum::{
    extract::FromRequestParts,
    http::{Request, StatusCode},
    response::IntoResponse,
};
use skald_test_utils::fixtures::auth::mint_expired_token;

use super::*;

fn parts_with_headers(headers: &[(&str, String)]) -> axum::http::request::Parts {
    let mut builder = Request::builder().uri("/api/clients");

    for (name, value) in headers {
        builder = builder.header(*name, value.as_str());
    }

    let (parts, _) = builder.body(()).unwrap().into_parts();

    parts
}

/// A valid bearer token authenticates the caller
#[tokio::test]
async fn accepts_valid_bearer_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state: AppState = test.to_app_state();

    let token = mint_token("user-1");
    let mut parts = parts_with_headers(&[("authorization", format!("Bearer {}", token))]);

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().subject, "user-1");

    Ok(())
}

/// The hosted auth provider's session cookie is accepted as a fallback
#[tokio::test]
async fn accepts_session_cookie() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state: AppState = test.to_app_state();

    let token = mint_token("user-2");
    let mut parts = parts_with_headers(&[("cookie", format!("sb-access-token={}", token))]);

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().subject, "user-2");

    Ok(())
}

/// A request with no credentials is rejected with 401
#[tokio::test]
async fn rejects_missing_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state: AppState = test.to_app_state();

    let mut parts = parts_with_headers(&[]);

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// A token signed with the wrong secret is rejected with 401
#[tokio::test]
async fn rejects_garbage_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state: AppState = test.to_app_state();

    let mut parts =
        parts_with_headers(&[("authorization", "Bearer not-a-real-token".to_string())]);

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// An expired token is rejected with 401
#[tokio::test]
async fn rejects_expired_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state: AppState = test.to_app_state();

    let token = mint_expired_token("user-1");
    let mut parts = parts_with_headers(&[("authorization", format!("Bearer {}", token))]);

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
