use crate::server::error::config::ConfigError;

const DEFAULT_SCRAPER_TIMEOUT_SECS: u64 = 30;
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

pub struct Config {
    pub database_url: String,
    pub scraper_url: String,
    pub scraper_timeout_secs: u64,
    pub auth_jwt_secret: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            scraper_url: require("SCRAPER_URL")?,
            scraper_timeout_secs: parse_or_default(
                "SCRAPER_TIMEOUT_SECS",
                DEFAULT_SCRAPER_TIMEOUT_SECS,
            )?,
            auth_jwt_secret: require("AUTH_JWT_SECRET")?,
            openai_api_key: require("OPENAI_API_KEY")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            user_agent: std::env::var("USER_AGENT")
                .unwrap_or_else(|_| format!("skald/{}", env!("CARGO_PKG_VERSION"))),
        })
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_or_default(var: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected an integer, got {:?}", value),
        }),
        Err(_) => Ok(default),
    }
}
