use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        part,
        stock_movement::{self, MovementType},
    },
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordMovementInput {
    pub part_id: Uuid,
    pub movement_type: MovementType,
    #[validate(range(min = 1, message = "A mennyiségnek pozitívnak kell lennie"))]
    pub quantity: i32,
}

/// Stock movement booking. The movement row and the part's stock update
/// commit in one transaction.
#[derive(Clone)]
pub struct StockMovementService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl StockMovementService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    #[instrument(skip(self, input), fields(part_id = %input.part_id))]
    pub async fn record(
        &self,
        input: RecordMovementInput,
    ) -> Result<stock_movement::Model, ServiceError> {
        if input.quantity <= 0 {
            return Err(ServiceError::ValidationError(
                "A mennyiségnek pozitívnak kell lennie".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let part = part::Entity::find_by_id(input.part_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Alkatrész nem található".to_string()))?;

        if input.movement_type == MovementType::Out && part.stock_quantity < input.quantity {
            return Err(ServiceError::InsufficientStock(
                "Nincs elég készlet a kiadáshoz".to_string(),
            ));
        }

        let movement = stock_movement::ActiveModel {
            id: Set(Uuid::new_v4()),
            part_id: Set(input.part_id),
            movement_type: Set(input.movement_type),
            quantity: Set(input.quantity),
            created_at: Set(Utc::now()),
        };
        let movement = movement.insert(&txn).await?;

        let new_quantity = part.stock_quantity + input.movement_type.sign() * input.quantity;
        let mut part_active: part::ActiveModel = part.into();
        part_active.stock_quantity = Set(new_quantity);
        part_active.updated_at = Set(Utc::now());
        part_active.update(&txn).await?;

        txn.commit().await?;

        self.event_sender
            .send(Event::StockMovementRecorded {
                part_id: input.part_id,
                movement_type: input.movement_type.as_str().to_string(),
                quantity: input.quantity,
                new_stock: new_quantity,
            })
            .await;

        info!(
            "Stock movement recorded for part {}: {} {}",
            input.part_id,
            input.movement_type.as_str(),
            input.quantity
        );
        Ok(movement)
    }

    /// Movement history for a part, newest first.
    #[instrument(skip(self))]
    pub async fn list_for_part(
        &self,
        part_id: Uuid,
    ) -> Result<Vec<stock_movement::Model>, ServiceError> {
        part::Entity::find_by_id(part_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Alkatrész nem található".to_string()))?;

        stock_movement::Entity::find()
            .filter(stock_movement::Column::PartId.eq(part_id))
            .order_by_desc(stock_movement::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }
}
