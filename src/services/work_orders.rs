use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    domain::{
        search::{self, OrderSearchFields},
        status::{self, WorkStatus},
    },
    entities::{
        client, vehicle,
        work_order::{self, PartLine, ProcessLine},
    },
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkOrderInput {
    pub client_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    #[validate(length(min = 1, message = "A turbó kód megadása kötelező"))]
    pub turbo_code: String,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkOrderInput {
    pub turbo_code: Option<String>,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i32>,
    pub license_plate: Option<String>,
    pub engine_code: Option<String>,
    pub general_notes: Option<String>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub parts: Option<Vec<PartLine>>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub processes: Option<Vec<ProcessLine>>,
    pub status_passed: Option<bool>,
    pub status_refused: Option<bool>,
    pub cleaning_price: Option<Decimal>,
    pub reconditioning_price: Option<Decimal>,
    pub turbo_price: Option<Decimal>,
    pub status: Option<WorkStatus>,
    pub quote_sent: Option<bool>,
    pub quote_accepted: Option<bool>,
    pub estimated_completion: Option<NaiveDate>,
    pub finalized: Option<bool>,
    pub client_notified: Option<bool>,
}

/// Query filters for the list endpoint.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct WorkOrderFilter {
    pub status: Option<WorkStatus>,
    pub client_id: Option<Uuid>,
    pub search: Option<String>,
}

/// Work-order row joined with client/vehicle data, as listed by the board.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorkOrderSummary {
    pub id: Uuid,
    pub work_number: String,
    pub client_name: String,
    pub client_phone: String,
    pub vehicle_info: String,
    pub turbo_code: String,
    pub received_date: NaiveDate,
    pub status: WorkStatus,
    pub status_label: String,
    pub status_badge: String,
    pub total_amount: Decimal,
    pub estimated_completion: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl OrderSearchFields for WorkOrderSummary {
    fn work_number(&self) -> &str {
        &self.work_number
    }
    fn client_name(&self) -> &str {
        &self.client_name
    }
    fn client_phone(&self) -> &str {
        &self.client_phone
    }
    fn turbo_code(&self) -> &str {
        &self.turbo_code
    }
    fn status(&self) -> WorkStatus {
        self.status
    }
}

/// Work order lifecycle management.
#[derive(Clone)]
pub struct WorkOrderService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
    work_number_start: u64,
}

impl WorkOrderService {
    pub fn new(
        db: Arc<DatabaseConnection>,
        event_sender: Arc<EventSender>,
        work_number_start: u64,
    ) -> Self {
        Self {
            db,
            event_sender,
            work_number_start,
        }
    }

    /// Next sequential work number: one past the highest purely numeric
    /// number on file, or the configured starting number on an empty table.
    /// Non-numeric legacy values are skipped.
    async fn next_work_number(&self) -> Result<String, ServiceError> {
        let numbers: Vec<String> = work_order::Entity::find()
            .select_only()
            .column(work_order::Column::WorkNumber)
            .into_tuple()
            .all(&*self.db)
            .await?;

        let next = numbers
            .iter()
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .map(|max| max + 1)
            .unwrap_or(self.work_number_start);

        Ok(next.to_string())
    }

    #[instrument(skip(self, input), fields(client_id = %input.client_id))]
    pub async fn create(
        &self,
        input: CreateWorkOrderInput,
    ) -> Result<work_order::Model, ServiceError> {
        client::Entity::find_by_id(input.client_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::ValidationError("Ügyfél nem található".to_string()))?;

        if let Some(vehicle_id) = input.vehicle_id {
            let vehicle = vehicle::Entity::find_by_id(vehicle_id)
                .one(&*self.db)
                .await?
                .ok_or_else(|| ServiceError::ValidationError("Jármű nem található".to_string()))?;
            if vehicle.client_id != input.client_id {
                return Err(ServiceError::ValidationError(
                    "A jármű nem ehhez az ügyfélhez tartozik".to_string(),
                ));
            }
        }

        let work_number = self.next_work_number().await?;
        let now = Utc::now();

        let model = work_order::ActiveModel {
            id: Set(Uuid::new_v4()),
            work_number: Set(work_number.clone()),
            client_id: Set(input.client_id),
            vehicle_id: Set(input.vehicle_id),
            turbo_code: Set(input.turbo_code),
            received_date: Set(now.date_naive()),
            car_make: Set(String::new()),
            car_model: Set(String::new()),
            car_year: Set(None),
            license_plate: Set(String::new()),
            engine_code: Set(String::new()),
            general_notes: Set(String::new()),
            parts: Set(serde_json::json!([])),
            processes: Set(serde_json::json!([])),
            status_passed: Set(false),
            status_refused: Set(false),
            cleaning_price: Set(Decimal::ZERO),
            reconditioning_price: Set(Decimal::ZERO),
            turbo_price: Set(Decimal::ZERO),
            status: Set(WorkStatus::Received),
            quote_sent: Set(false),
            quote_accepted: Set(false),
            estimated_completion: Set(None),
            finalized: Set(false),
            client_notified: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await?;
        self.event_sender
            .send(Event::WorkOrderCreated {
                work_order_id: created.id,
                work_number,
            })
            .await;
        info!("Work order created: {} (#{})", created.id, created.work_number);
        Ok(created)
    }

    /// Joined summaries, newest first, filtered per [`WorkOrderFilter`].
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: WorkOrderFilter,
    ) -> Result<Vec<WorkOrderSummary>, ServiceError> {
        let mut query = work_order::Entity::find();
        if let Some(client_id) = filter.client_id {
            query = query.filter(work_order::Column::ClientId.eq(client_id));
        }
        let orders = query
            .order_by_desc(work_order::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        let clients: HashMap<Uuid, client::Model> = client::Entity::find()
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let vehicles: HashMap<Uuid, vehicle::Model> = vehicle::Entity::find()
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        let summaries: Vec<WorkOrderSummary> = orders
            .into_iter()
            .map(|order| {
                let client = clients.get(&order.client_id);
                let vehicle_info = order
                    .vehicle_id
                    .and_then(|id| vehicles.get(&id))
                    .map(|v| format!("{} {}", v.make, v.model).trim().to_string())
                    .unwrap_or_default();
                let (status_label, status_badge) = {
                    let s = order.status;
                    (s.label().to_string(), s.badge_class().to_string())
                };
                WorkOrderSummary {
                    id: order.id,
                    work_number: order.work_number.clone(),
                    client_name: client.map(|c| c.name.clone()).unwrap_or_default(),
                    client_phone: client.map(|c| c.phone.clone()).unwrap_or_default(),
                    vehicle_info,
                    turbo_code: order.turbo_code.clone(),
                    received_date: order.received_date,
                    status: order.status,
                    status_label,
                    status_badge,
                    total_amount: order.total_amount(),
                    estimated_completion: order.estimated_completion,
                    created_at: order.created_at,
                }
            })
            .collect();

        Ok(search::filter_orders(
            summaries,
            filter.search.as_deref(),
            filter.status,
        ))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<work_order::Model, ServiceError> {
        work_order::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Munkalap nem található".to_string()))
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateWorkOrderInput,
    ) -> Result<work_order::Model, ServiceError> {
        let existing = self.get(id).await?;
        let old_status = existing.status;

        // Status changes go through the workflow check even when bundled
        // into a general update.
        let new_status = match input.status {
            Some(requested) => Some(status::transition(old_status, requested)?),
            None => None,
        };

        let mut active: work_order::ActiveModel = existing.into();

        if let Some(turbo_code) = input.turbo_code {
            active.turbo_code = Set(turbo_code);
        }
        if let Some(car_make) = input.car_make {
            active.car_make = Set(car_make);
        }
        if let Some(car_model) = input.car_model {
            active.car_model = Set(car_model);
        }
        if let Some(car_year) = input.car_year {
            active.car_year = Set(Some(car_year));
        }
        if let Some(license_plate) = input.license_plate {
            active.license_plate = Set(license_plate);
        }
        if let Some(engine_code) = input.engine_code {
            active.engine_code = Set(engine_code);
        }
        if let Some(general_notes) = input.general_notes {
            active.general_notes = Set(general_notes);
        }
        if let Some(parts) = input.parts {
            active.parts = Set(serde_json::to_value(parts)
                .map_err(|e| ServiceError::InvalidInput(e.to_string()))?);
        }
        if let Some(processes) = input.processes {
            active.processes = Set(serde_json::to_value(processes)
                .map_err(|e| ServiceError::InvalidInput(e.to_string()))?);
        }
        if let Some(status_passed) = input.status_passed {
            active.status_passed = Set(status_passed);
        }
        if let Some(status_refused) = input.status_refused {
            active.status_refused = Set(status_refused);
        }
        if let Some(cleaning_price) = input.cleaning_price {
            active.cleaning_price = Set(cleaning_price);
        }
        if let Some(reconditioning_price) = input.reconditioning_price {
            active.reconditioning_price = Set(reconditioning_price);
        }
        if let Some(turbo_price) = input.turbo_price {
            active.turbo_price = Set(turbo_price);
        }
        if let Some(status) = new_status {
            active.status = Set(status);
        }
        if let Some(quote_sent) = input.quote_sent {
            active.quote_sent = Set(quote_sent);
        }
        if let Some(quote_accepted) = input.quote_accepted {
            active.quote_accepted = Set(quote_accepted);
        }
        if let Some(estimated_completion) = input.estimated_completion {
            active.estimated_completion = Set(Some(estimated_completion));
        }
        if let Some(finalized) = input.finalized {
            active.finalized = Set(finalized);
        }
        if let Some(client_notified) = input.client_notified {
            active.client_notified = Set(client_notified);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&*self.db).await?;

        if let Some(status) = new_status {
            if status != old_status {
                self.event_sender
                    .send(Event::WorkOrderStatusChanged {
                        work_order_id: id,
                        old_status: old_status.as_str().to_string(),
                        new_status: status.as_str().to_string(),
                    })
                    .await;
            }
        }
        self.event_sender.send(Event::WorkOrderUpdated(id)).await;

        Ok(updated)
    }

    /// Guarded status change, run inside a transaction so a concurrent
    /// update cannot interleave between the check and the write.
    #[instrument(skip(self), fields(work_order_id = %id, new_status = %new_status))]
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: WorkStatus,
    ) -> Result<work_order::Model, ServiceError> {
        let txn = self.db.begin().await?;

        let order = work_order::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Munkalap nem található".to_string()))?;

        let old_status = order.status;
        status::transition(old_status, new_status)?;

        let mut active: work_order::ActiveModel = order.into();
        active.status = Set(new_status);
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        if new_status != old_status {
            self.event_sender
                .send(Event::WorkOrderStatusChanged {
                    work_order_id: id,
                    old_status: old_status.as_str().to_string(),
                    new_status: new_status.as_str().to_string(),
                })
                .await;
        }

        info!(
            "Work order {} status updated from '{}' to '{}'",
            id, old_status, new_status
        );
        Ok(updated)
    }
}
