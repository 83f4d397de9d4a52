//! Bearer-token helpers for authenticated test requests.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::constant::TEST_JWT_SECRET;

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: usize,
    email: Option<String>,
}

/// Mint a bearer token signed with the test secret, valid for one hour.
pub fn mint_token(subject: &str) -> String {
    let claims = Claims {
        sub: subject.to_string(),
        exp: (Utc::now() + chrono::Duration::hours(1)).timestamp() as usize,
        email: Some(format!("{}@example.com", subject)),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}

/// Mint a token that expired an hour ago.
pub fn mint_expired_token(subject: &str) -> String {
    let claims = Claims {
        sub: subject.to_string(),
        exp: (Utc::now() - chrono::Duration::hours(1)).timestamp() as usize,
        email: None,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}
