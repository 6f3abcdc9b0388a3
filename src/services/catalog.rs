use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        car_make, car_model,
        turbo_part::{self, TurboCategory},
        work_process,
    },
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertTurboPartInput {
    pub category: TurboCategory,
    #[validate(length(min = 1, message = "A cikkszám megadása kötelező"))]
    pub part_code: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub price: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertWorkProcessInput {
    #[validate(length(min = 1, message = "A név megadása kötelező"))]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub estimated_time: i32,
    #[serde(default)]
    pub base_price: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCarMakeInput {
    #[validate(length(min = 1, message = "A név megadása kötelező"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCarModelInput {
    pub make_id: Uuid,
    #[validate(length(min = 1, message = "A név megadása kötelező"))]
    pub name: String,
    #[serde(default)]
    pub engine_codes: Vec<String>,
    #[serde(default)]
    pub common_turbos: Vec<String>,
}

/// Reference catalogs: turbo parts, work processes, car makes/models.
#[derive(Clone)]
pub struct CatalogService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl CatalogService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    // ---- Turbo parts ----

    #[instrument(skip(self))]
    pub async fn list_turbo_parts(&self) -> Result<Vec<turbo_part::Model>, ServiceError> {
        turbo_part::Entity::find()
            .order_by_asc(turbo_part::Column::Category)
            .order_by_asc(turbo_part::Column::PartCode)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self, input))]
    pub async fn create_turbo_part(
        &self,
        input: UpsertTurboPartInput,
    ) -> Result<turbo_part::Model, ServiceError> {
        let model = turbo_part::ActiveModel {
            id: Set(Uuid::new_v4()),
            category: Set(input.category),
            part_code: Set(input.part_code),
            supplier: Set(input.supplier),
            price: Set(input.price),
            active: Set(true),
            created_at: Set(Utc::now()),
        };

        let created = model.insert(&*self.db).await?;
        self.event_sender
            .send(Event::CatalogEntryCreated {
                kind: "turbo_part".to_string(),
                id: created.id,
            })
            .await;
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update_turbo_part(
        &self,
        id: Uuid,
        input: UpsertTurboPartInput,
    ) -> Result<turbo_part::Model, ServiceError> {
        let existing = turbo_part::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Alkatrész nem található".to_string()))?;

        let mut active: turbo_part::ActiveModel = existing.into();
        active.category = Set(input.category);
        active.part_code = Set(input.part_code);
        active.supplier = Set(input.supplier);
        active.price = Set(input.price);
        active.update(&*self.db).await.map_err(Into::into)
    }

    #[instrument(skip(self))]
    pub async fn delete_turbo_part(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = turbo_part::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Alkatrész nem található".to_string()))?;

        existing.delete(&*self.db).await?;
        self.event_sender
            .send(Event::CatalogEntryDeleted {
                kind: "turbo_part".to_string(),
                id,
            })
            .await;
        info!("Turbo part deleted: {}", id);
        Ok(())
    }

    // ---- Work processes ----

    #[instrument(skip(self))]
    pub async fn list_work_processes(&self) -> Result<Vec<work_process::Model>, ServiceError> {
        work_process::Entity::find()
            .order_by_asc(work_process::Column::Name)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self, input))]
    pub async fn create_work_process(
        &self,
        input: UpsertWorkProcessInput,
    ) -> Result<work_process::Model, ServiceError> {
        let model = work_process::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            category: Set(input.category),
            estimated_time: Set(input.estimated_time),
            base_price: Set(input.base_price),
            active: Set(true),
            created_at: Set(Utc::now()),
        };

        let created = model.insert(&*self.db).await?;
        self.event_sender
            .send(Event::CatalogEntryCreated {
                kind: "work_process".to_string(),
                id: created.id,
            })
            .await;
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update_work_process(
        &self,
        id: Uuid,
        input: UpsertWorkProcessInput,
    ) -> Result<work_process::Model, ServiceError> {
        let existing = work_process::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Munkafolyamat nem található".to_string()))?;

        let mut active: work_process::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.category = Set(input.category);
        active.estimated_time = Set(input.estimated_time);
        active.base_price = Set(input.base_price);
        active.update(&*self.db).await.map_err(Into::into)
    }

    #[instrument(skip(self))]
    pub async fn delete_work_process(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = work_process::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Munkafolyamat nem található".to_string()))?;

        existing.delete(&*self.db).await?;
        self.event_sender
            .send(Event::CatalogEntryDeleted {
                kind: "work_process".to_string(),
                id,
            })
            .await;
        info!("Work process deleted: {}", id);
        Ok(())
    }

    // ---- Car makes & models ----

    #[instrument(skip(self))]
    pub async fn list_car_makes(&self) -> Result<Vec<car_make::Model>, ServiceError> {
        car_make::Entity::find()
            .order_by_asc(car_make::Column::Name)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self, input))]
    pub async fn create_car_make(
        &self,
        input: CreateCarMakeInput,
    ) -> Result<car_make::Model, ServiceError> {
        let existing = car_make::Entity::find()
            .filter(car_make::Column::Name.eq(&input.name))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict("Az autó márka már létezik".to_string()));
        }

        let model = car_make::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            created_at: Set(Utc::now()),
        };
        model.insert(&*self.db).await.map_err(Into::into)
    }

    #[instrument(skip(self))]
    pub async fn list_car_models(
        &self,
        make_id: Uuid,
    ) -> Result<Vec<car_model::Model>, ServiceError> {
        car_make::Entity::find_by_id(make_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Autó márka nem található".to_string()))?;

        car_model::Entity::find()
            .filter(car_model::Column::MakeId.eq(make_id))
            .order_by_asc(car_model::Column::Name)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self, input))]
    pub async fn create_car_model(
        &self,
        input: CreateCarModelInput,
    ) -> Result<car_model::Model, ServiceError> {
        car_make::Entity::find_by_id(input.make_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::ValidationError("Autó márka nem található".to_string()))?;

        let model = car_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            make_id: Set(input.make_id),
            name: Set(input.name),
            engine_codes: Set(serde_json::json!(input.engine_codes)),
            common_turbos: Set(serde_json::json!(input.common_turbos)),
            created_at: Set(Utc::now()),
        };
        model.insert(&*self.db).await.map_err(Into::into)
    }
}
