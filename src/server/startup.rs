use std::time::Duration;

use async_openai::config::OpenAIConfig;

use crate::server::{config::Config, error::Error};

/// Build and configure the scraper service client
pub fn build_scraper_client(config: &Config) -> Result<scraper_client::Client, Error> {
    let scraper = scraper_client::Client::builder()
        .base_url(&config.scraper_url)
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.scraper_timeout_secs))
        .build()?;

    Ok(scraper)
}

/// Build the LLM client used for brief generation
pub fn build_llm_client(config: &Config) -> async_openai::Client<OpenAIConfig> {
    let openai_config = OpenAIConfig::new().with_api_key(config.openai_api_key.as_str());

    async_openai::Client::with_config(openai_config)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
