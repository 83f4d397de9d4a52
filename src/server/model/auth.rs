use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{decode, Algorithm, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// Cookie the hosted auth provider sets for browser sessions.
static SESSION_COOKIE: &str = "sb-access-token";

/// Claims carried in the hosted auth provider's access tokens.
#[derive(Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub email: Option<String>,
}

/// The authenticated caller.
///
/// Extracting this from a request validates the bearer token (or the hosted
/// auth provider's session cookie) against the configured shared secret;
/// handlers that take an `AuthUser` reject unauthenticated requests with 401.
pub struct AuthUser {
    pub subject: String,
    pub email: Option<String>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match parts.extract::<TypedHeader<Authorization<Bearer>>>().await {
            Ok(TypedHeader(header)) => header.token().to_string(),
            Err(_) => {
                let jar = CookieJar::from_headers(&parts.headers);

                jar.get(SESSION_COOKIE)
                    .map(|cookie| cookie.value().to_string())
                    .ok_or(AuthError::MissingToken)?
            }
        };

        let data = decode::<Claims>(
            &token,
            &state.jwt_decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthUser {
            subject: data.claims.sub,
            email: data.claims.email,
        })
    }
}
