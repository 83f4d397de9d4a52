//! Test context structure and utilities.
//!
//! The `TestContext` bundles an in-memory SQLite database, a mockito server
//! standing in for both the scraper service and the LLM endpoint, and clients
//! pointed at that server. Most tests create one through the
//! [`test_setup_with_tables!`] or [`test_setup_with_content_tables!`] macros,
//! or through [`TestBuilder`](crate::TestBuilder).

use async_openai::config::OpenAIConfig;
use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::{TEST_JWT_SECRET, TEST_OPENAI_API_KEY, TEST_OPENAI_MODEL, TEST_USER_AGENT},
    error::TestError,
};

pub struct TestContext {
    /// Database connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// Scraper client pointed at the mock server
    pub scraper_client: scraper_client::Client,
    /// LLM client pointed at the mock server
    pub llm_client: async_openai::Client<OpenAIConfig>,
    /// Mock HTTP server standing in for the scraper service and LLM endpoint
    pub server: ServerGuard,
    /// Collection of mock endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        let scraper_client = scraper_client::Client::builder()
            .base_url(&mock_server_url)
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let llm_config = OpenAIConfig::new()
            .with_api_base(format!("{}/v1", mock_server_url))
            .with_api_key(TEST_OPENAI_API_KEY);
        let llm_client = async_openai::Client::with_config(llm_config);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            scraper_client,
            llm_client,
            server: mock_server,
            mocks: Vec::new(),
        })
    }

    /// Convert the context's clients into any type that can be constructed
    /// from them.
    ///
    /// This allows conversion to the application's state type without creating
    /// a circular dependency between the test-utils crate and the main crate.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(
            DatabaseConnection,
            scraper_client::Client,
            async_openai::Client<OpenAIConfig>,
            String,
            String,
        )>,
    {
        T::from((
            self.db.clone(),
            self.scraper_client.clone(),
            self.llm_client.clone(),
            TEST_OPENAI_MODEL.to_string(),
            TEST_JWT_SECRET.to_string(),
        ))
    }

    /// Create database tables from schema statements.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints registered through the builder were called as
    /// expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_content_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Client),
                schema.create_table_from_entity(entity::prelude::Source),
                schema.create_table_from_entity(entity::prelude::Content),
                schema.create_table_from_entity(entity::prelude::Brief),
                schema.create_table_from_entity(entity::prelude::AnalysisConfig),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
