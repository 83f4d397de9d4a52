use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::client::UpdateAnalysisConfigDto;

pub struct AnalysisConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalysisConfigRepository<'a> {
    /// Creates a new instance of [`AnalysisConfigRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_client(
        &self,
        client_id: i32,
    ) -> Result<Option<entity::analysis_config::Model>, DbErr> {
        entity::prelude::AnalysisConfig::find()
            .filter(entity::analysis_config::Column::ClientId.eq(client_id))
            .one(self.db)
            .await
    }

    /// Creates or overwrites the client's analysis config
    pub async fn upsert(
        &self,
        client_id: i32,
        config: UpdateAnalysisConfigDto,
    ) -> Result<entity::analysis_config::Model, DbErr> {
        let existing = self.get_by_client(client_id).await?;

        if let Some(existing) = existing {
            let mut model = existing.into_active_model();
            model.min_content_length = ActiveValue::Set(config.min_content_length);
            model.topics = ActiveValue::Set(serde_json::json!(config.topics));
            model.exclusion_patterns = ActiveValue::Set(serde_json::json!(config.exclusion_patterns));
            model.updated_at = ActiveValue::Set(Utc::now().naive_utc());

            return model.update(self.db).await;
        }

        let model = entity::analysis_config::ActiveModel {
            client_id: ActiveValue::Set(client_id),
            min_content_length: ActiveValue::Set(config.min_content_length),
            topics: ActiveValue::Set(serde_json::json!(config.topics)),
            exclusion_patterns: ActiveValue::Set(serde_json::json!(config.exclusion_patterns)),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use skald_test_utils::prelude::*;

    use crate::model::client::UpdateAnalysisConfigDto;

    use super::*;

    fn config_dto(min_content_length: i32) -> UpdateAnalysisConfigDto {
        UpdateAnalysisConfigDto {
            min_content_length,
            topics: vec!["hiking".to_string()],
            exclusion_patterns: vec!["sponsored".to_string()],
        }
    }

    /// Expect None when no config has been set for the client
    #[tokio::test]
    async fn get_returns_none_when_unset() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::Client,
            entity::prelude::AnalysisConfig
        )?;
        let client = test.data().insert_mock_client().await?;

        let config_repository = AnalysisConfigRepository::new(&test.db);
        let config = config_repository.get_by_client(client.id).await?;

        assert!(config.is_none());

        Ok(())
    }

    /// Expect upsert to create a config on first call
    #[tokio::test]
    async fn upsert_creates_config() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::Client,
            entity::prelude::AnalysisConfig
        )?;
        let client = test.data().insert_mock_client().await?;

        let config_repository = AnalysisConfigRepository::new(&test.db);
        let created = config_repository.upsert(client.id, config_dto(500)).await?;

        assert_eq!(created.client_id, client.id);
        assert_eq!(created.min_content_length, 500);

        Ok(())
    }

    /// Expect upsert to overwrite an existing config instead of inserting a
    /// second row
    #[tokio::test]
    async fn upsert_overwrites_existing_config() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::Client,
            entity::prelude::AnalysisConfig
        )?;
        let client = test.data().insert_mock_client().await?;

        let config_repository = AnalysisConfigRepository::new(&test.db);
        let created = config_repository.upsert(client.id, config_dto(500)).await?;
        let updated = config_repository.upsert(client.id, config_dto(1000)).await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.min_content_length, 1000);

        let all = entity::prelude::AnalysisConfig::find().all(&test.db).await?;

        assert_eq!(all.len(), 1);

        Ok(())
    }
}
