use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Car model under a make, with the engine codes and turbo codes commonly
/// seen on it (JSON string arrays).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car_models")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub make_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Json")]
    pub engine_codes: Json,
    #[sea_orm(column_type = "Json")]
    pub common_turbos: Json,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::car_make::Entity",
        from = "Column::MakeId",
        to = "super::car_make::Column::Id"
    )]
    Make,
}

impl Related<super::car_make::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Make.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
