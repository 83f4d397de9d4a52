use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::{
    model::brief::{CreateBriefDto, UpdateBriefDto},
    server::{
        data::{
            brief::{BriefRepository, NewBrief},
            content::ContentRepository,
        },
        error::{brief::BriefError, Error},
    },
};

pub struct BriefService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BriefService<'a> {
    /// Creates a new instance of [`BriefService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a hand-written brief for a client
    ///
    /// New briefs always start in draft status.
    pub async fn create_manual(
        &self,
        client_id: i32,
        brief: CreateBriefDto,
    ) -> Result<entity::brief::Model, Error> {
        self.validate_content_ids(client_id, &brief.content_ids)
            .await?;

        let brief_repository = BriefRepository::new(self.db);
        let created = brief_repository
            .create(
                client_id,
                NewBrief {
                    title: brief.title,
                    angle: brief.angle,
                    key_points: brief.key_points,
                    content_type: brief.content_type,
                    suggested_copy: brief.suggested_copy,
                    content_ids: brief.content_ids,
                    status: entity::brief::BriefStatus::Draft,
                    generated_by: entity::brief::GeneratedBy::Manual,
                },
            )
            .await?;

        Ok(created)
    }

    /// Overwrites a brief, validating any content references against the
    /// brief's client
    ///
    /// Returns `None` when no brief with the given ID exists.
    pub async fn update(
        &self,
        brief_id: i32,
        brief: UpdateBriefDto,
    ) -> Result<Option<entity::brief::Model>, Error> {
        let brief_repository = BriefRepository::new(self.db);

        let existing = brief_repository.get(brief_id).await?;
        let existing = if let Some(existing) = existing {
            existing
        } else {
            return Ok(None);
        };

        self.validate_content_ids(existing.client_id, &brief.content_ids)
            .await?;

        Ok(brief_repository.update(brief_id, brief).await?)
    }

    /// Ensures every referenced content ID exists and belongs to the client
    pub async fn validate_content_ids(
        &self,
        client_id: i32,
        content_ids: &[i32],
    ) -> Result<(), Error> {
        if content_ids.is_empty() {
            return Ok(());
        }

        let content_repository = ContentRepository::new(self.db);
        let found = content_repository.get_many(client_id, content_ids).await?;
        let found_ids: HashSet<i32> = found.iter().map(|content| content.id).collect();

        let missing: Vec<i32> = content_ids
            .iter()
            .copied()
            .filter(|id| !found_ids.contains(id))
            .collect();

        if !missing.is_empty() {
            return Err(BriefError::UnknownContentIds(missing).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use skald_test_utils::prelude::*;

    use crate::{model::brief::BriefStatus, server::util::test::factory};

    use super::*;

    mod create_manual {
        use super::*;

        /// Expect a manually created brief to start as a draft
        #[tokio::test]
        async fn creates_draft_brief() -> Result<(), TestError> {
            let test = test_setup_with_content_tables!()?;
            let client = test.data().insert_mock_client().await?;

            let brief_service = BriefService::new(&test.db);
            let result = brief_service
                .create_manual(client.id, factory::create_brief_dto())
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let created = result.unwrap();

            assert_eq!(created.status, entity::brief::BriefStatus::Draft);
            assert_eq!(created.generated_by, entity::brief::GeneratedBy::Manual);

            Ok(())
        }

        /// Expect valid content references to be accepted
        #[tokio::test]
        async fn accepts_known_content_ids() -> Result<(), TestError> {
            let test = test_setup_with_content_tables!()?;
            let client = test.data().insert_mock_client().await?;
            let source = test.data().insert_mock_source(client.id).await?;
            let content = test.data().insert_mock_content(client.id, source.id).await?;

            let mut brief = factory::create_brief_dto();
            brief.content_ids = vec![content.id];

            let brief_service = BriefService::new(&test.db);
            let result = brief_service.create_manual(client.id, brief).await;

            assert!(result.is_ok(), "Error: {:?}", result);
            assert_eq!(
                result.unwrap().content_ids,
                serde_json::json!(vec![content.id])
            );

            Ok(())
        }

        /// Expect unknown content references to be rejected
        #[tokio::test]
        async fn rejects_unknown_content_ids() -> Result<(), TestError> {
            let test = test_setup_with_content_tables!()?;
            let client = test.data().insert_mock_client().await?;

            let mut brief = factory::create_brief_dto();
            brief.content_ids = vec![999];

            let brief_service = BriefService::new(&test.db);
            let result = brief_service.create_manual(client.id, brief).await;

            assert!(matches!(
                result,
                Err(Error::BriefError(BriefError::UnknownContentIds(_)))
            ));

            Ok(())
        }

        /// Expect content belonging to another client to be rejected
        #[tokio::test]
        async fn rejects_other_clients_content() -> Result<(), TestError> {
            let test = test_setup_with_content_tables!()?;
            let client_a = test.data().insert_mock_client().await?;
            let client_b = test.data().insert_mock_client().await?;
            let source_b = test.data().insert_mock_source(client_b.id).await?;
            let foreign = test
                .data()
                .insert_mock_content(client_b.id, source_b.id)
                .await?;

            let mut brief = factory::create_brief_dto();
            brief.content_ids = vec![foreign.id];

            let brief_service = BriefService::new(&test.db);
            let result = brief_service.create_manual(client_a.id, brief).await;

            assert!(matches!(
                result,
                Err(Error::BriefError(BriefError::UnknownContentIds(_)))
            ));

            Ok(())
        }
    }

    mod update {
        use crate::model::brief::UpdateBriefDto;

        use super::*;

        /// Expect approving a draft brief to persist the new status
        #[tokio::test]
        async fn approves_draft_brief() -> Result<(), TestError> {
            let test = test_setup_with_content_tables!()?;
            let client = test.data().insert_mock_client().await?;

            let brief_service = BriefService::new(&test.db);
            let created = brief_service
                .create_manual(client.id, factory::create_brief_dto())
                .await?;

            let update = UpdateBriefDto {
                title: created.title.clone(),
                angle: created.angle.clone(),
                key_points: vec!["point".to_string()],
                content_type: created.content_type.clone(),
                suggested_copy: None,
                status: BriefStatus::Approved,
                content_ids: Vec::new(),
            };
            let updated = brief_service.update(created.id, update).await?;

            assert!(updated.is_some());
            assert_eq!(
                updated.unwrap().status,
                entity::brief::BriefStatus::Approved
            );

            Ok(())
        }

        /// Expect None when the brief does not exist
        #[tokio::test]
        async fn returns_none_for_unknown_brief() -> Result<(), TestError> {
            let test = test_setup_with_content_tables!()?;

            let brief_service = BriefService::new(&test.db);
            let update = UpdateBriefDto {
                title: "Nothing".to_string(),
                angle: None,
                key_points: Vec::new(),
                content_type: "blog_post".to_string(),
                suggested_copy: None,
                status: BriefStatus::Draft,
                content_ids: Vec::new(),
            };
            let updated = brief_service.update(999, update).await?;

            assert!(updated.is_none());

            Ok(())
        }
    }
}
