use chrono::Utc;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    entities::{
        part_type, supplier,
        turbo_part::{self, TurboCategory},
        work_process,
    },
    errors::ServiceError,
    events::{Event, EventSender},
};

const PART_TYPES: &[&str] = &[
    "Ansamblu central (CHRA)",
    "Geometria",
    "Set garnitura",
    "Nozle Ring Cage",
];

const SUPPLIERS: &[&str] = &["Melett", "Vallion", "Cer"];

/// Counters for what the seeding pass actually inserted.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct SeedReport {
    pub part_types_created: u32,
    pub suppliers_created: u32,
    pub work_processes_created: u32,
    pub turbo_parts_created: u32,
}

/// Idempotent reference-data seeding behind `POST /api/initialize-data`.
/// Rows are matched by natural key; existing data is never overwritten.
#[derive(Clone)]
pub struct SeedService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl SeedService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    #[instrument(skip(self))]
    pub async fn initialize_data(&self) -> Result<SeedReport, ServiceError> {
        let mut report = SeedReport::default();

        for name in PART_TYPES {
            let existing = part_type::Entity::find()
                .filter(part_type::Column::Name.eq(*name))
                .one(&*self.db)
                .await?;
            if existing.is_none() {
                part_type::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set((*name).to_string()),
                    created_at: Set(Utc::now()),
                }
                .insert(&*self.db)
                .await?;
                report.part_types_created += 1;
            }
        }

        for name in SUPPLIERS {
            let existing = supplier::Entity::find()
                .filter(supplier::Column::Name.eq(*name))
                .one(&*self.db)
                .await?;
            if existing.is_none() {
                supplier::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set((*name).to_string()),
                    created_at: Set(Utc::now()),
                }
                .insert(&*self.db)
                .await?;
                report.suppliers_created += 1;
            }
        }

        let processes: &[(&str, &str, i32, rust_decimal::Decimal)] = &[
            ("Szétszerelés", "Disassembly", 45, dec!(40)),
            ("Tisztítás", "Cleaning", 60, dec!(170)),
            ("Diagnosztika", "Diagnosis", 30, dec!(50)),
            ("Felújítás", "Reconditioning", 120, dec!(170)),
            ("Összeszerelés", "Assembly", 60, dec!(60)),
            ("Kiegyensúlyozás", "Balancing", 30, dec!(80)),
        ];
        for (name, category, minutes, price) in processes {
            let existing = work_process::Entity::find()
                .filter(work_process::Column::Name.eq(*name))
                .one(&*self.db)
                .await?;
            if existing.is_none() {
                work_process::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set((*name).to_string()),
                    category: Set((*category).to_string()),
                    estimated_time: Set(*minutes),
                    base_price: Set(*price),
                    active: Set(true),
                    created_at: Set(Utc::now()),
                }
                .insert(&*self.db)
                .await?;
                report.work_processes_created += 1;
            }
        }

        let turbo_parts: &[(TurboCategory, &str, &str, rust_decimal::Decimal)] = &[
            (TurboCategory::Chra, "CHRA-STD", "Melett", dec!(450)),
            (TurboCategory::Geo, "GEO-STD", "Melett", dec!(220)),
            (TurboCategory::Act, "ACT-STD", "Vallion", dec!(180)),
            (TurboCategory::SetGar, "SETGAR-STD", "Cer", dec!(35)),
        ];
        for (category, part_code, supplier_name, price) in turbo_parts {
            let existing = turbo_part::Entity::find()
                .filter(turbo_part::Column::PartCode.eq(*part_code))
                .one(&*self.db)
                .await?;
            if existing.is_none() {
                turbo_part::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    category: Set(*category),
                    part_code: Set((*part_code).to_string()),
                    supplier: Set((*supplier_name).to_string()),
                    price: Set(*price),
                    active: Set(true),
                    created_at: Set(Utc::now()),
                }
                .insert(&*self.db)
                .await?;
                report.turbo_parts_created += 1;
            }
        }

        self.event_sender.send(Event::ReferenceDataSeeded).await;
        info!(
            "Reference data seeded: {} part types, {} suppliers, {} processes, {} turbo parts",
            report.part_types_created,
            report.suppliers_created,
            report.work_processes_created,
            report.turbo_parts_created
        );
        Ok(report)
    }
}
