use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{part, part_type, stock_movement, supplier},
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePartInput {
    #[validate(length(min = 1, message = "A név megadása kötelező"))]
    pub name: String,
    #[validate(length(min = 1, message = "A kód megadása kötelező"))]
    pub code: String,
    pub part_type_id: Uuid,
    pub supplier_id: Uuid,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePartInput {
    pub name: Option<String>,
    pub code: Option<String>,
    pub part_type_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
    pub notes: Option<String>,
}

/// Part row joined with its reference-table names, as listed by the UI.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PartWithDetails {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub part_type_name: String,
    pub supplier_name: String,
    pub notes: String,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Spare part management.
#[derive(Clone)]
pub struct PartService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl PartService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreatePartInput) -> Result<part::Model, ServiceError> {
        part_type::Entity::find_by_id(input.part_type_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::ValidationError("Alkatrésztípus nem található".to_string()))?;

        supplier::Entity::find_by_id(input.supplier_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::ValidationError("Beszállító nem található".to_string()))?;

        let duplicate = part::Entity::find()
            .filter(part::Column::Code.eq(&input.code))
            .one(&*self.db)
            .await?;
        if duplicate.is_some() {
            return Err(ServiceError::Conflict(
                "Ez a kód már használatban van".to_string(),
            ));
        }

        let now = Utc::now();
        let model = part::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            code: Set(input.code),
            part_type_id: Set(input.part_type_id),
            supplier_id: Set(input.supplier_id),
            notes: Set(input.notes),
            stock_quantity: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await?;
        self.event_sender.send(Event::PartCreated(created.id)).await;
        info!("Part created: {} ({})", created.id, created.code);
        Ok(created)
    }

    /// Lists parts joined with type and supplier names, optionally filtered
    /// by a case-insensitive search over code, notes and the joined names.
    #[instrument(skip(self))]
    pub async fn list_with_details(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<PartWithDetails>, ServiceError> {
        let parts = part::Entity::find().all(&*self.db).await?;

        let type_names: HashMap<Uuid, String> = part_type::Entity::find()
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|pt| (pt.id, pt.name))
            .collect();
        let supplier_names: HashMap<Uuid, String> = supplier::Entity::find()
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        let mut rows: Vec<PartWithDetails> = parts
            .into_iter()
            .map(|p| PartWithDetails {
                id: p.id,
                name: p.name,
                code: p.code,
                part_type_name: type_names.get(&p.part_type_id).cloned().unwrap_or_default(),
                supplier_name: supplier_names
                    .get(&p.supplier_id)
                    .cloned()
                    .unwrap_or_default(),
                notes: p.notes,
                stock_quantity: p.stock_quantity,
                created_at: p.created_at,
                updated_at: p.updated_at,
            })
            .collect();

        if let Some(term) = search.map(str::to_lowercase).filter(|t| !t.is_empty()) {
            rows.retain(|row| {
                row.name.to_lowercase().contains(&term)
                    || row.code.to_lowercase().contains(&term)
                    || row.notes.to_lowercase().contains(&term)
                    || row.part_type_name.to_lowercase().contains(&term)
                    || row.supplier_name.to_lowercase().contains(&term)
            });
        }

        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdatePartInput) -> Result<part::Model, ServiceError> {
        let existing = part::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Alkatrész nem található".to_string()))?;

        let mut active: part::ActiveModel = existing.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(code) = input.code {
            let duplicate = part::Entity::find()
                .filter(part::Column::Code.eq(&code))
                .filter(part::Column::Id.ne(id))
                .one(&*self.db)
                .await?;
            if duplicate.is_some() {
                return Err(ServiceError::Conflict(
                    "Ez a kód már használatban van".to_string(),
                ));
            }
            active.code = Set(code);
        }
        if let Some(part_type_id) = input.part_type_id {
            part_type::Entity::find_by_id(part_type_id)
                .one(&*self.db)
                .await?
                .ok_or_else(|| {
                    ServiceError::ValidationError("Alkatrésztípus nem található".to_string())
                })?;
            active.part_type_id = Set(part_type_id);
        }
        if let Some(supplier_id) = input.supplier_id {
            supplier::Entity::find_by_id(supplier_id)
                .one(&*self.db)
                .await?
                .ok_or_else(|| ServiceError::ValidationError("Beszállító nem található".to_string()))?;
            active.supplier_id = Set(supplier_id);
        }
        if let Some(notes) = input.notes {
            active.notes = Set(notes);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&*self.db).await?;
        self.event_sender.send(Event::PartUpdated(id)).await;
        Ok(updated)
    }

    /// Deletes a part and its stock movement history.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = part::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Alkatrész nem található".to_string()))?;

        existing.delete(&*self.db).await?;
        stock_movement::Entity::delete_many()
            .filter(stock_movement::Column::PartId.eq(id))
            .exec(&*self.db)
            .await?;

        self.event_sender.send(Event::PartDeleted(id)).await;
        info!("Part deleted: {}", id);
        Ok(())
    }
}
