use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::pricing::PricedLine;
use crate::domain::status::WorkStatus;

/// Work order for one turbocharger unit: intake data, selected parts and
/// processes, the three fixed price components, inspection/quote flags and
/// the workflow status.
///
/// `parts` and `processes` are JSON arrays of [`PartLine`] /
/// [`ProcessLine`]; they are snapshots taken from the catalogs at selection
/// time, so later catalog price edits never rewrite an existing quote.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub work_number: String,
    pub client_id: Uuid,
    #[sea_orm(nullable)]
    pub vehicle_id: Option<Uuid>,
    pub turbo_code: String,
    pub received_date: NaiveDate,

    // Vehicle snapshot as written on the paper sheet
    pub car_make: String,
    pub car_model: String,
    #[sea_orm(nullable)]
    pub car_year: Option<i32>,
    pub license_plate: String,
    pub engine_code: String,
    pub general_notes: String,

    #[sea_orm(column_type = "Json")]
    pub parts: Json,
    #[sea_orm(column_type = "Json")]
    pub processes: Json,

    // Inspection flags
    pub status_passed: bool,
    pub status_refused: bool,

    // Price components
    pub cleaning_price: Decimal,
    pub reconditioning_price: Decimal,
    pub turbo_price: Decimal,

    // Workflow
    pub status: WorkStatus,
    pub quote_sent: bool,
    pub quote_accepted: bool,
    #[sea_orm(nullable)]
    pub estimated_completion: Option<NaiveDate>,
    pub finalized: bool,
    pub client_notified: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id"
    )]
    Vehicle,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Turbo part selected on a work order (snapshot of a catalog row).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartLine {
    pub part_id: Uuid,
    pub part_code: String,
    pub category: String,
    pub supplier: String,
    pub price: Decimal,
    #[serde(default)]
    pub selected: bool,
}

/// Work process attached to a work order (snapshot of a catalog row).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessLine {
    pub process_id: Uuid,
    pub name: String,
    pub category: String,
    pub estimated_time: i32,
    pub price: Decimal,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub notes: String,
}

impl PricedLine for PartLine {
    fn price(&self) -> Decimal {
        self.price
    }
    fn selected(&self) -> bool {
        self.selected
    }
}

impl Model {
    /// Decoded part lines. Rows written by older tooling may hold
    /// malformed JSON; those decode as an empty list rather than failing
    /// the whole read.
    pub fn part_lines(&self) -> Vec<PartLine> {
        serde_json::from_value(self.parts.clone()).unwrap_or_default()
    }

    pub fn process_lines(&self) -> Vec<ProcessLine> {
        serde_json::from_value(self.processes.clone()).unwrap_or_default()
    }

    /// Quote total for this order; see [`crate::domain::pricing`].
    pub fn total_amount(&self) -> Decimal {
        crate::domain::pricing::order_total(
            self.cleaning_price,
            self.reconditioning_price,
            self.turbo_price,
            &self.part_lines(),
        )
    }
}
