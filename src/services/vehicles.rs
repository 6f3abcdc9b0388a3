use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{client, vehicle},
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicleInput {
    pub client_id: Uuid,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    pub year: Option<i32>,
    #[serde(default)]
    pub license_plate: String,
    #[serde(default)]
    pub vin: String,
    #[serde(default)]
    pub engine_code: String,
}

/// Vehicle registry, linked to clients.
#[derive(Clone)]
pub struct VehicleService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl VehicleService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    #[instrument(skip(self, input), fields(client_id = %input.client_id))]
    pub async fn create(&self, input: CreateVehicleInput) -> Result<vehicle::Model, ServiceError> {
        client::Entity::find_by_id(input.client_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::ValidationError("Ügyfél nem található".to_string()))?;

        let model = vehicle::ActiveModel {
            id: Set(Uuid::new_v4()),
            client_id: Set(input.client_id),
            make: Set(input.make),
            model: Set(input.model),
            year: Set(input.year),
            license_plate: Set(input.license_plate),
            vin: Set(input.vin),
            engine_code: Set(input.engine_code),
            created_at: Set(Utc::now()),
        };

        let created = model.insert(&*self.db).await?;
        self.event_sender
            .send(Event::VehicleCreated(created.id))
            .await;
        info!("Vehicle created: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn list(&self, client_id: Option<Uuid>) -> Result<Vec<vehicle::Model>, ServiceError> {
        let mut query = vehicle::Entity::find();
        if let Some(client_id) = client_id {
            query = query.filter(vehicle::Column::ClientId.eq(client_id));
        }
        query.all(&*self.db).await.map_err(Into::into)
    }
}
