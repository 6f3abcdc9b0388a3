use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Knowledge-base note attached to a turbo code ("this unit needs the
/// updated actuator", etc.).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "turbo_notes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub turbo_code: String,
    pub note_type: NoteSeverity,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(12))")]
pub enum NoteSeverity {
    #[sea_orm(string_value = "INFO")]
    #[serde(rename = "INFO")]
    Info,
    #[sea_orm(string_value = "WARNING")]
    #[serde(rename = "WARNING")]
    Warning,
    #[sea_orm(string_value = "CRITICAL")]
    #[serde(rename = "CRITICAL")]
    Critical,
}
