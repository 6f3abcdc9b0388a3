pub mod catalog;
pub mod clients;
pub mod common;
pub mod notes;
pub mod part_types;
pub mod parts;
pub mod seed;
pub mod settings;
pub mod stock_movements;
pub mod suppliers;
pub mod vehicles;
pub mod work_orders;

use crate::db::DbPool;
use crate::events::EventSender;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub part_types: Arc<crate::services::part_types::PartTypeService>,
    pub suppliers: Arc<crate::services::suppliers::SupplierService>,
    pub parts: Arc<crate::services::parts::PartService>,
    pub stock_movements: Arc<crate::services::stock_movements::StockMovementService>,
    pub clients: Arc<crate::services::clients::ClientService>,
    pub vehicles: Arc<crate::services::vehicles::VehicleService>,
    pub work_orders: Arc<crate::services::work_orders::WorkOrderService>,
    pub catalog: Arc<crate::services::catalog::CatalogService>,
    pub notes: Arc<crate::services::notes::NotesService>,
    pub branding: Arc<crate::services::branding::BrandingService>,
    pub seed: Arc<crate::services::seed::SeedService>,
}

impl AppServices {
    pub fn new(db: Arc<DbPool>, event_sender: Arc<EventSender>, work_number_start: u64) -> Self {
        Self {
            part_types: Arc::new(crate::services::part_types::PartTypeService::new(db.clone())),
            suppliers: Arc::new(crate::services::suppliers::SupplierService::new(db.clone())),
            parts: Arc::new(crate::services::parts::PartService::new(
                db.clone(),
                event_sender.clone(),
            )),
            stock_movements: Arc::new(crate::services::stock_movements::StockMovementService::new(
                db.clone(),
                event_sender.clone(),
            )),
            clients: Arc::new(crate::services::clients::ClientService::new(
                db.clone(),
                event_sender.clone(),
            )),
            vehicles: Arc::new(crate::services::vehicles::VehicleService::new(
                db.clone(),
                event_sender.clone(),
            )),
            work_orders: Arc::new(crate::services::work_orders::WorkOrderService::new(
                db.clone(),
                event_sender.clone(),
                work_number_start,
            )),
            catalog: Arc::new(crate::services::catalog::CatalogService::new(
                db.clone(),
                event_sender.clone(),
            )),
            notes: Arc::new(crate::services::notes::NotesService::new(db.clone())),
            branding: Arc::new(crate::services::branding::BrandingService::new(
                db.clone(),
                event_sender.clone(),
            )),
            seed: Arc::new(crate::services::seed::SeedService::new(db, event_sender)),
        }
    }
}
