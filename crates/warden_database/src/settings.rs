//! Maintenance flag.

use crate::{MAINTENANCE_KEY, SETTINGS, StateStore};
use tracing::{info, instrument, warn};
use warden_storage::DocumentUpdate;

impl StateStore {
    /// Whether maintenance mode is on. Unset or unreadable means off.
    #[instrument(skip(self), level = "debug")]
    pub async fn get_maintenance(&self) -> bool {
        match self.backend.find_one(SETTINGS, MAINTENANCE_KEY).await {
            Ok(document) => document
                .and_then(|doc| doc.get("status").and_then(|status| status.as_bool()))
                .unwrap_or(false),
            Err(e) => {
                warn!(error = %e, "Failed to read maintenance flag");
                false
            }
        }
    }

    /// Set the maintenance flag. Returns `false` if the backend failed.
    #[instrument(skip(self))]
    pub async fn set_maintenance(&self, enabled: bool) -> bool {
        let update = DocumentUpdate::new().set("status", enabled);
        match self.backend.upsert(SETTINGS, MAINTENANCE_KEY, update).await {
            Ok(_) => {
                info!(enabled, "Maintenance flag updated");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to write maintenance flag");
                false
            }
        }
    }
}
