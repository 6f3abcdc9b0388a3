use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// Domain events emitted by the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Inventory events
    PartCreated(Uuid),
    PartUpdated(Uuid),
    PartDeleted(Uuid),
    StockMovementRecorded {
        part_id: Uuid,
        movement_type: String,
        quantity: i32,
        new_stock: i32,
    },

    // Client / vehicle events
    ClientCreated(Uuid),
    ClientUpdated(Uuid),
    VehicleCreated(Uuid),

    // Work order events
    WorkOrderCreated {
        work_order_id: Uuid,
        work_number: String,
    },
    WorkOrderUpdated(Uuid),
    WorkOrderStatusChanged {
        work_order_id: Uuid,
        old_status: String,
        new_status: String,
    },

    // Catalog events
    CatalogEntryCreated {
        kind: String,
        id: Uuid,
    },
    CatalogEntryDeleted {
        kind: String,
        id: Uuid,
    },

    // Configuration events
    BrandingUpdated,
    ReferenceDataSeeded,
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event; delivery is best-effort and never blocks the caller's
    /// request path on a full channel.
    pub async fn send(&self, event: Event) {
        if let Err(e) = self.sender.send(event).await {
            warn!("Failed to send event: {}", e);
        }
    }
}

/// Drains the event channel, writing an audit line per event.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        match &event {
            Event::StockMovementRecorded {
                part_id,
                movement_type,
                quantity,
                new_stock,
            } => {
                info!(
                    part_id = %part_id,
                    movement_type = %movement_type,
                    quantity,
                    new_stock,
                    "stock movement recorded"
                );
            }
            Event::WorkOrderStatusChanged {
                work_order_id,
                old_status,
                new_status,
            } => {
                info!(
                    work_order_id = %work_order_id,
                    old_status = %old_status,
                    new_status = %new_status,
                    "work order status changed"
                );
            }
            Event::WorkOrderCreated {
                work_order_id,
                work_number,
            } => {
                info!(work_order_id = %work_order_id, work_number = %work_number, "work order created");
            }
            other => {
                info!(event = ?other, "event processed");
            }
        }
    }

    info!("Event channel closed; processing loop exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_is_best_effort_after_receiver_drop() {
        let (tx, rx) = mpsc::channel(4);
        drop(rx);
        // Must not panic or error out the caller.
        EventSender::new(tx).send(Event::BrandingUpdated).await;
    }

    #[tokio::test]
    async fn events_round_trip_through_channel() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = EventSender::new(tx);
        sender
            .send(Event::StockMovementRecorded {
                part_id: Uuid::new_v4(),
                movement_type: "IN".into(),
                quantity: 5,
                new_stock: 5,
            })
            .await;

        match rx.recv().await {
            Some(Event::StockMovementRecorded { quantity, .. }) => assert_eq!(quantity, 5),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
