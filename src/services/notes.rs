use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{car_note, turbo_note, turbo_note::NoteSeverity},
    errors::ServiceError,
};

const DEFAULT_AUTHOR: &str = "System";

fn default_severity() -> NoteSeverity {
    NoteSeverity::Info
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTurboNoteInput {
    #[validate(length(min = 1, message = "A turbó kód megadása kötelező"))]
    pub turbo_code: String,
    #[serde(default = "default_severity")]
    pub note_type: NoteSeverity,
    #[validate(length(min = 1, message = "A cím megadása kötelező"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_by: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCarNoteInput {
    #[validate(length(min = 1, message = "A gyártmány megadása kötelező"))]
    pub car_make: String,
    #[validate(length(min = 1, message = "A modell megadása kötelező"))]
    pub car_model: String,
    #[serde(default)]
    pub engine_code: String,
    #[serde(default = "default_severity")]
    pub note_type: NoteSeverity,
    #[validate(length(min = 1, message = "A cím megadása kötelező"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_by: Option<String>,
}

/// Knowledge-base notes for turbo codes and car models. Technicians see
/// these while filling in a work order.
#[derive(Clone)]
pub struct NotesService {
    db: Arc<DatabaseConnection>,
}

impl NotesService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input))]
    pub async fn create_turbo_note(
        &self,
        input: CreateTurboNoteInput,
    ) -> Result<turbo_note::Model, ServiceError> {
        let model = turbo_note::ActiveModel {
            id: Set(Uuid::new_v4()),
            turbo_code: Set(input.turbo_code),
            note_type: Set(input.note_type),
            title: Set(input.title),
            description: Set(input.description),
            created_by: Set(input.created_by.unwrap_or_else(|| DEFAULT_AUTHOR.to_string())),
            active: Set(true),
            created_at: Set(Utc::now()),
        };
        model.insert(&*self.db).await.map_err(Into::into)
    }

    /// Active turbo notes, optionally narrowed to one turbo code.
    #[instrument(skip(self))]
    pub async fn list_turbo_notes(
        &self,
        turbo_code: Option<&str>,
    ) -> Result<Vec<turbo_note::Model>, ServiceError> {
        let mut query = turbo_note::Entity::find().filter(turbo_note::Column::Active.eq(true));
        if let Some(code) = turbo_code {
            query = query.filter(turbo_note::Column::TurboCode.eq(code));
        }
        query
            .order_by_desc(turbo_note::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self, input))]
    pub async fn create_car_note(
        &self,
        input: CreateCarNoteInput,
    ) -> Result<car_note::Model, ServiceError> {
        let model = car_note::ActiveModel {
            id: Set(Uuid::new_v4()),
            car_make: Set(input.car_make),
            car_model: Set(input.car_model),
            engine_code: Set(input.engine_code),
            note_type: Set(input.note_type),
            title: Set(input.title),
            description: Set(input.description),
            created_by: Set(input.created_by.unwrap_or_else(|| DEFAULT_AUTHOR.to_string())),
            active: Set(true),
            created_at: Set(Utc::now()),
        };
        model.insert(&*self.db).await.map_err(Into::into)
    }

    /// Active car notes, optionally narrowed to a make and/or model.
    #[instrument(skip(self))]
    pub async fn list_car_notes(
        &self,
        car_make: Option<&str>,
        car_model: Option<&str>,
    ) -> Result<Vec<car_note::Model>, ServiceError> {
        let mut query = car_note::Entity::find().filter(car_note::Column::Active.eq(true));
        if let Some(make) = car_make {
            query = query.filter(car_note::Column::CarMake.eq(make));
        }
        if let Some(model) = car_model {
            query = query.filter(car_note::Column::CarModel.eq(model));
        }
        query
            .order_by_desc(car_note::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }
}
