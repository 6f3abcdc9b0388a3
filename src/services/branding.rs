use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::{
    entities::app_setting,
    errors::ServiceError,
    events::{Event, EventSender},
};

const BRANDING_KEY: &str = "branding";

/// UI branding overlay: display name, logo and label overrides. The whole
/// document is replaced on every write; unknown label keys are preserved
/// as-is for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BrandingConfig {
    pub app_name: String,
    /// Logo as a data URL (or empty when unset)
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        let labels = [
            ("clients", "Ügyfelek"),
            ("workOrders", "Munkalapok"),
            ("newWorkOrder", "Új Munkalap"),
            ("parts", "Alkatrészek"),
            ("processes", "Munkafolyamatok"),
            ("settings", "Beállítások"),
            ("dashboard", "Áttekintés"),
            ("search", "Keresés"),
            ("add", "Hozzáadás"),
            ("edit", "Szerkesztés"),
            ("delete", "Törlés"),
            ("save", "Mentés"),
            ("cancel", "Mégsem"),
            ("name", "Név"),
            ("phone", "Telefon"),
            ("address", "Cím"),
            ("company", "Cégnév"),
            ("vehicle", "Jármű"),
            ("turboCode", "Turbó kód"),
            ("status", "Státusz"),
            ("total", "Összeg"),
            ("notes", "Megjegyzések"),
            ("backToMain", "Vissza a főoldalra"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            app_name: "Turbó Szerviz Kezelő".to_string(),
            logo_url: String::new(),
            labels,
        }
    }
}

/// Branding configuration with a subscription channel.
///
/// The original application persisted this overlay in browser storage and
/// re-read it on a timer. Here there is one owner: writes go to the
/// `app_settings` table and are pushed to in-process subscribers through a
/// `watch` channel, so nothing polls.
#[derive(Clone)]
pub struct BrandingService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
    current: watch::Sender<BrandingConfig>,
}

impl BrandingService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        let (current, _) = watch::channel(BrandingConfig::default());
        Self {
            db,
            event_sender,
            current,
        }
    }

    /// Loads the persisted overlay into the watch channel. Called once at
    /// startup; a missing or unreadable row leaves the defaults in place.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), ServiceError> {
        if let Some(row) = app_setting::Entity::find_by_id(BRANDING_KEY.to_string())
            .one(&*self.db)
            .await?
        {
            match serde_json::from_value::<BrandingConfig>(row.value) {
                Ok(config) => {
                    self.current.send_replace(config);
                }
                Err(e) => {
                    tracing::warn!("Stored branding config is unreadable, using defaults: {}", e);
                }
            }
        }
        Ok(())
    }

    /// Current overlay (defaults when nothing has been stored).
    pub fn get(&self) -> BrandingConfig {
        self.current.borrow().clone()
    }

    /// Subscription for components that want push-based updates.
    pub fn subscribe(&self) -> watch::Receiver<BrandingConfig> {
        self.current.subscribe()
    }

    /// Replaces the overlay: persists it and notifies subscribers.
    #[instrument(skip(self, config))]
    pub async fn update(&self, config: BrandingConfig) -> Result<BrandingConfig, ServiceError> {
        let value = serde_json::to_value(&config)
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        let existing = app_setting::Entity::find_by_id(BRANDING_KEY.to_string())
            .one(&*self.db)
            .await?;

        match existing {
            Some(row) => {
                let mut active: app_setting::ActiveModel = row.into();
                active.value = Set(value);
                active.updated_at = Set(Utc::now());
                active.update(&*self.db).await?;
            }
            None => {
                let active = app_setting::ActiveModel {
                    key: Set(BRANDING_KEY.to_string()),
                    value: Set(value),
                    updated_at: Set(Utc::now()),
                };
                active.insert(&*self.db).await?;
            }
        }

        self.current.send_replace(config.clone());
        self.event_sender.send(Event::BrandingUpdated).await;
        info!("Branding configuration updated");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_cover_the_navigation() {
        let config = BrandingConfig::default();
        assert_eq!(config.app_name, "Turbó Szerviz Kezelő");
        for key in ["clients", "workOrders", "parts", "settings", "total"] {
            assert!(config.labels.contains_key(key), "missing label {key}");
        }
    }
}
