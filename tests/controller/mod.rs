//! Endpoint tests calling the Axum handlers directly with a test `AppState`.

pub mod auth;
pub mod brief;
pub mod client;
pub mod content;
pub mod scraper;
pub mod source;

pub use skald::server::model::{app::AppState, auth::AuthUser};
pub use skald_test_utils::prelude::*;

/// A pre-authenticated caller for handlers that take an `AuthUser`.
pub fn auth_user() -> AuthUser {
    AuthUser {
        subject: "user-1".to_string(),
        email: Some("user-1@example.com".to_string()),
    }
}

/// Decode a response body as JSON.
pub async fn response_json<T: serde::de::DeserializeOwned>(
    response: axum::response::Response,
) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to decode response body")
}
