use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::client,
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClientInput {
    #[validate(length(min = 1, message = "A név megadása kötelező"))]
    pub name: String,
    #[validate(length(min = 1, message = "A telefonszám megadása kötelező"))]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub tax_number: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClientInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub company_name: Option<String>,
    pub tax_number: Option<String>,
    pub notes: Option<String>,
}

/// Client account management.
#[derive(Clone)]
pub struct ClientService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl ClientService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateClientInput) -> Result<client::Model, ServiceError> {
        let existing = client::Entity::find()
            .filter(client::Column::Phone.eq(&input.phone))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(
                "Ügyfél ezzel a telefonszámmal már létezik".to_string(),
            ));
        }

        let now = Utc::now();
        let model = client::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            phone: Set(input.phone),
            email: Set(input.email),
            address: Set(input.address),
            company_name: Set(input.company_name),
            tax_number: Set(input.tax_number),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await?;
        self.event_sender.send(Event::ClientCreated(created.id)).await;
        info!("Client created: {}", created.id);
        Ok(created)
    }

    /// Lists clients ordered by name, optionally filtered by a
    /// case-insensitive search over name, phone and company name.
    #[instrument(skip(self))]
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<client::Model>, ServiceError> {
        let mut clients = client::Entity::find()
            .order_by_asc(client::Column::Name)
            .all(&*self.db)
            .await?;

        if let Some(term) = search
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
        {
            clients.retain(|c| {
                c.name.to_lowercase().contains(&term)
                    || c.phone.to_lowercase().contains(&term)
                    || c.company_name.to_lowercase().contains(&term)
            });
        }

        Ok(clients)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<client::Model, ServiceError> {
        client::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Ügyfél nem található".to_string()))
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateClientInput,
    ) -> Result<client::Model, ServiceError> {
        let existing = self.get(id).await?;

        if let Some(phone) = &input.phone {
            let duplicate = client::Entity::find()
                .filter(client::Column::Phone.eq(phone))
                .filter(client::Column::Id.ne(id))
                .one(&*self.db)
                .await?;
            if duplicate.is_some() {
                return Err(ServiceError::Conflict(
                    "Ügyfél ezzel a telefonszámmal már létezik".to_string(),
                ));
            }
        }

        let mut active: client::ActiveModel = existing.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(phone) = input.phone {
            active.phone = Set(phone);
        }
        if let Some(email) = input.email {
            active.email = Set(email);
        }
        if let Some(address) = input.address {
            active.address = Set(address);
        }
        if let Some(company_name) = input.company_name {
            active.company_name = Set(company_name);
        }
        if let Some(tax_number) = input.tax_number {
            active.tax_number = Set(tax_number);
        }
        if let Some(notes) = input.notes {
            active.notes = Set(notes);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&*self.db).await?;
        self.event_sender.send(Event::ClientUpdated(id)).await;
        Ok(updated)
    }
}
