use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::client::{CreateClientDto, UpdateClientDto};

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    /// Creates a new instance of [`ClientRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new client
    pub async fn create(&self, client: CreateClientDto) -> Result<entity::client::Model, DbErr> {
        let client = entity::client::ActiveModel {
            name: ActiveValue::Set(client.name),
            description: ActiveValue::Set(client.description),
            niche: ActiveValue::Set(client.niche),
            target_audience: ActiveValue::Set(client.target_audience),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        client.insert(self.db).await
    }

    pub async fn get(&self, client_id: i32) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find_by_id(client_id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::client::Model>, DbErr> {
        entity::prelude::Client::find()
            .order_by_asc(entity::client::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites every user-editable field of a client
    ///
    /// Returns `None` when no client with the given ID exists.
    pub async fn update(
        &self,
        client_id: i32,
        client: UpdateClientDto,
    ) -> Result<Option<entity::client::Model>, DbErr> {
        let existing = self.get(client_id).await?;

        let existing = if let Some(existing) = existing {
            existing
        } else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.name = ActiveValue::Set(client.name);
        model.description = ActiveValue::Set(client.description);
        model.niche = ActiveValue::Set(client.niche);
        model.target_audience = ActiveValue::Set(client.target_audience);

        Ok(Some(model.update(self.db).await?))
    }

    /// Deletes a client
    ///
    /// Returns OK regardless of the client existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, client_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Client::delete_by_id(client_id)
            .exec(self.db)
            .await
    }
}
