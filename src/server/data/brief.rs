use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::brief::UpdateBriefDto;

/// Fields for a brief row about to be inserted.
///
/// Both manual creation and AI generation funnel through this shape; the
/// caller decides status and provenance.
pub struct NewBrief {
    pub title: String,
    pub angle: Option<String>,
    pub key_points: Vec<String>,
    pub content_type: String,
    pub suggested_copy: Option<String>,
    pub content_ids: Vec<i32>,
    pub status: entity::brief::BriefStatus,
    pub generated_by: entity::brief::GeneratedBy,
}

pub struct BriefRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BriefRepository<'a> {
    /// Creates a new instance of [`BriefRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new brief for a client
    pub async fn create(
        &self,
        client_id: i32,
        brief: NewBrief,
    ) -> Result<entity::brief::Model, DbErr> {
        let brief = entity::brief::ActiveModel {
            client_id: ActiveValue::Set(client_id),
            content_ids: ActiveValue::Set(serde_json::json!(brief.content_ids)),
            title: ActiveValue::Set(brief.title),
            angle: ActiveValue::Set(brief.angle),
            key_points: ActiveValue::Set(serde_json::json!(brief.key_points)),
            content_type: ActiveValue::Set(brief.content_type),
            suggested_copy: ActiveValue::Set(brief.suggested_copy),
            status: ActiveValue::Set(brief.status),
            generated_by: ActiveValue::Set(brief.generated_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        brief.insert(self.db).await
    }

    pub async fn get(&self, brief_id: i32) -> Result<Option<entity::brief::Model>, DbErr> {
        entity::prelude::Brief::find_by_id(brief_id).one(self.db).await
    }

    pub async fn list_by_client(
        &self,
        client_id: i32,
    ) -> Result<Vec<entity::brief::Model>, DbErr> {
        entity::prelude::Brief::find()
            .filter(entity::brief::Column::ClientId.eq(client_id))
            .order_by_desc(entity::brief::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Overwrites every user-editable field of a brief, including its review
    /// status
    ///
    /// Returns `None` when no brief with the given ID exists.
    pub async fn update(
        &self,
        brief_id: i32,
        brief: UpdateBriefDto,
    ) -> Result<Option<entity::brief::Model>, DbErr> {
        let existing = self.get(brief_id).await?;

        let existing = if let Some(existing) = existing {
            existing
        } else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.title = ActiveValue::Set(brief.title);
        model.angle = ActiveValue::Set(brief.angle);
        model.key_points = ActiveValue::Set(serde_json::json!(brief.key_points));
        model.content_type = ActiveValue::Set(brief.content_type);
        model.suggested_copy = ActiveValue::Set(brief.suggested_copy);
        model.status = ActiveValue::Set(brief.status.into());
        model.content_ids = ActiveValue::Set(serde_json::json!(brief.content_ids));

        Ok(Some(model.update(self.db).await?))
    }

    /// Deletes a brief
    ///
    /// Returns OK regardless of the brief existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, brief_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Brief::delete_by_id(brief_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use skald_test_utils::prelude::*;

    use crate::{
        model::brief::{BriefStatus, UpdateBriefDto},
        server::util::test::factory,
    };

    use super::*;

    mod create {
        use super::*;

        /// Expect success when creating a brief
        #[tokio::test]
        async fn creates_brief() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::Client, entity::prelude::Brief)?;
            let client = test.data().insert_mock_client().await?;

            let brief_repository = BriefRepository::new(&test.db);
            let result = brief_repository
                .create(client.id, factory::new_brief())
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let created = result.unwrap();

            assert_eq!(created.client_id, client.id);
            assert_eq!(created.status, entity::brief::BriefStatus::Draft);
            assert_eq!(created.generated_by, entity::brief::GeneratedBy::Manual);

            Ok(())
        }

        /// Expect error when the referenced client does not exist
        #[tokio::test]
        async fn fails_for_unknown_client() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::Client, entity::prelude::Brief)?;

            let brief_repository = BriefRepository::new(&test.db);
            let result = brief_repository.create(999, factory::new_brief()).await;

            assert!(result.is_err(), "Expected error, instead got: {:?}", result);

            Ok(())
        }
    }

    mod list_by_client {
        use super::*;

        /// Expect only the given client's briefs to be returned
        #[tokio::test]
        async fn filters_by_client() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::Client, entity::prelude::Brief)?;
            let client_a = test.data().insert_mock_client().await?;
            let client_b = test.data().insert_mock_client().await?;

            let brief_repository = BriefRepository::new(&test.db);
            brief_repository
                .create(client_a.id, factory::new_brief())
                .await?;
            brief_repository
                .create(client_b.id, factory::new_brief())
                .await?;

            let briefs = brief_repository.list_by_client(client_a.id).await?;

            assert_eq!(briefs.len(), 1);
            assert_eq!(briefs[0].client_id, client_a.id);

            Ok(())
        }
    }

    mod update {
        use super::*;

        /// Expect the review status to be overwritten
        #[tokio::test]
        async fn overwrites_status() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::Client, entity::prelude::Brief)?;
            let client = test.data().insert_mock_client().await?;

            let brief_repository = BriefRepository::new(&test.db);
            let created = brief_repository
                .create(client.id, factory::new_brief())
                .await?;

            let update = UpdateBriefDto {
                title: created.title.clone(),
                angle: None,
                key_points: vec!["one point".to_string()],
                content_type: created.content_type.clone(),
                suggested_copy: None,
                status: BriefStatus::Approved,
                content_ids: Vec::new(),
            };
            let updated = brief_repository.update(created.id, update).await?;

            assert!(updated.is_some());
            let updated = updated.unwrap();

            assert_eq!(updated.status, entity::brief::BriefStatus::Approved);
            assert_eq!(
                updated.key_points,
                serde_json::json!(vec!["one point".to_string()])
            );

            Ok(())
        }

        /// Expect None when updating a brief that does not exist
        #[tokio::test]
        async fn returns_none_for_unknown_brief() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::Client, entity::prelude::Brief)?;

            let brief_repository = BriefRepository::new(&test.db);
            let update = UpdateBriefDto {
                title: "Nothing".to_string(),
                angle: None,
                key_points: Vec::new(),
                content_type: "blog_post".to_string(),
                suggested_copy: None,
                status: BriefStatus::Draft,
                content_ids: Vec::new(),
            };
            let updated = brief_repository.update(999, update).await?;

            assert!(updated.is_none());

            Ok(())
        }
    }

    mod delete {
        use super::*;

        /// Expect deleting a client to cascade to its briefs
        #[tokio::test]
        async fn client_delete_cascades() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::Client, entity::prelude::Brief)?;
            let client = test.data().insert_mock_client().await?;

            let brief_repository = BriefRepository::new(&test.db);
            let created = brief_repository
                .create(client.id, factory::new_brief())
                .await?;

            entity::prelude::Client::delete_by_id(client.id)
                .exec(&test.db)
                .await?;

            let orphan = brief_repository.get(created.id).await?;

            assert!(orphan.is_none());

            Ok(())
        }
    }
}
