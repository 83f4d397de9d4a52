use async_openai::config::OpenAIConfig;
use jsonwebtoken::DecodingKey;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub scraper: scraper_client::Client,
    pub llm: async_openai::Client<OpenAIConfig>,
    pub llm_model: String,
    pub jwt_decoding_key: DecodingKey,
}

/// Builds an `AppState` from its parts plus the JWT secret.
///
/// Exists so the test-utils crate can assemble state without depending on
/// this crate.
impl
    From<(
        DatabaseConnection,
        scraper_client::Client,
        async_openai::Client<OpenAIConfig>,
        String,
        String,
    )> for AppState
{
    fn from(
        (db, scraper, llm, llm_model, jwt_secret): (
            DatabaseConnection,
            scraper_client::Client,
            async_openai::Client<OpenAIConfig>,
            String,
            String,
        ),
    ) -> Self {
        Self {
            db,
            scraper,
            llm,
            llm_model,
            jwt_decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }
}
