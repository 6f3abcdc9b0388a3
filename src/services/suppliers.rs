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
    entities::{part, supplier},
    errors::ServiceError,
};

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertSupplierInput {
    #[validate(length(min = 1, message = "A név megadása kötelező"))]
    pub name: String,
}

/// Supplier reference data management.
#[derive(Clone)]
pub struct SupplierService {
    db: Arc<DatabaseConnection>,
}

impl SupplierService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: UpsertSupplierInput) -> Result<supplier::Model, ServiceError> {
        let existing = supplier::Entity::find()
            .filter(supplier::Column::Name.eq(&input.name))
            .one(&*self.db)
            .await?;

        if existing.is_some() {
            return Err(ServiceError::Conflict("A beszállító már létezik".to_string()));
        }

        let model = supplier::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            created_at: Set(Utc::now()),
        };

        let created = model.insert(&*self.db).await?;
        info!("Supplier created: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<supplier::Model>, ServiceError> {
        supplier::Entity::find()
            .order_by_asc(supplier::Column::Name)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: Uuid,
        input: UpsertSupplierInput,
    ) -> Result<supplier::Model, ServiceError> {
        let existing = supplier::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Beszállító nem található".to_string()))?;

        let mut active: supplier::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.update(&*self.db).await.map_err(Into::into)
    }

    /// Deletes a supplier, refusing while any part still references it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let referencing = part::Entity::find()
            .filter(part::Column::SupplierId.eq(id))
            .one(&*self.db)
            .await?;

        if referencing.is_some() {
            return Err(ServiceError::Conflict(
                "Nem törölhető, mert vannak hozzá tartozó alkatrészek".to_string(),
            ));
        }

        let existing = supplier::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Beszállító nem található".to_string()))?;

        existing.delete(&*self.db).await?;
        info!("Supplier deleted: {}", id);
        Ok(())
    }
}
