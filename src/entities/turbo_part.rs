use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog row for a turbo repair component.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "turbo_parts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category: TurboCategory,
    pub part_code: String,
    pub supplier: String,
    pub price: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The four part categories the workshop quotes from.
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
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TurboCategory {
    /// Center housing rotating assembly
    #[sea_orm(string_value = "C.H.R.A")]
    #[serde(rename = "C.H.R.A")]
    Chra,
    /// Variable geometry
    #[sea_orm(string_value = "GEO")]
    #[serde(rename = "GEO")]
    Geo,
    /// Actuator
    #[sea_orm(string_value = "ACT")]
    #[serde(rename = "ACT")]
    Act,
    /// Gasket set
    #[sea_orm(string_value = "SET.GAR")]
    #[serde(rename = "SET.GAR")]
    SetGar,
}

impl TurboCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chra => "C.H.R.A",
            Self::Geo => "GEO",
            Self::Act => "ACT",
            Self::SetGar => "SET.GAR",
        }
    }
}
