//! Declarative test builder.
//!
//! `TestBuilder` queues table creation and mock endpoint registration, then
//! executes everything during the final `build()` call. Fixture rows and mock
//! endpoints can also be added after building through the accessors on
//! [`TestContext`].

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_content_tables: bool,
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_content_tables: false,
            mock_builders: Vec::new(),
        }
    }

    /// Add the full content schema (client, source, content, brief, analysis
    /// config) to the test database.
    pub fn with_content_tables(mut self) -> Self {
        self.include_content_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context, creating all queued tables and mock endpoints.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_content_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Client),
                schema.create_table_from_entity(entity::prelude::Source),
                schema.create_table_from_entity(entity::prelude::Content),
                schema.create_table_from_entity(entity::prelude::Brief),
                schema.create_table_from_entity(entity::prelude::AnalysisConfig),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        let mut mocks = Vec::new();
        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
