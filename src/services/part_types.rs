use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{part, part_type},
    errors::ServiceError,
};

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertPartTypeInput {
    #[validate(length(min = 1, message = "A név megadása kötelező"))]
    pub name: String,
}

/// Part type reference data management.
#[derive(Clone)]
pub struct PartTypeService {
    db: Arc<DatabaseConnection>,
}

impl PartTypeService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: UpsertPartTypeInput) -> Result<part_type::Model, ServiceError> {
        let existing = part_type::Entity::find()
            .filter(part_type::Column::Name.eq(&input.name))
            .one(&*self.db)
            .await?;

        if existing.is_some() {
            return Err(ServiceError::Conflict(
                "Az alkatrésztípus már létezik".to_string(),
            ));
        }

        let model = part_type::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            created_at: Set(Utc::now()),
        };

        let created = model.insert(&*self.db).await?;
        info!("Part type created: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<part_type::Model>, ServiceError> {
        part_type::Entity::find()
            .order_by_asc(part_type::Column::Name)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: Uuid,
        input: UpsertPartTypeInput,
    ) -> Result<part_type::Model, ServiceError> {
        let existing = part_type::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Alkatrésztípus nem található".to_string()))?;

        let mut active: part_type::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.update(&*self.db).await.map_err(Into::into)
    }

    /// Deletes a part type, refusing while any part still references it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let referencing = part::Entity::find()
            .filter(part::Column::PartTypeId.eq(id))
            .one(&*self.db)
            .await?;

        if referencing.is_some() {
            return Err(ServiceError::Conflict(
                "Nem törölhető, mert vannak hozzá tartozó alkatrészek".to_string(),
            ));
        }

        let existing = part_type::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Alkatrésztípus nem található".to_string()))?;

        existing.delete(&*self.db).await?;
        info!("Part type deleted: {}", id);
        Ok(())
    }
}
