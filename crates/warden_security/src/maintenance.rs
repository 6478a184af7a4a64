//! Maintenance mode guard.

use crate::{Guard, GuardKind, GuardVerdict, maintenance_notice};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};
use warden_core::{GuardEvent, Identity};
use warden_database::StateStore;

/// Blocks every non-administrator while maintenance mode is on.
#[derive(Debug, Clone)]
pub struct MaintenanceGuard {
    store: Arc<StateStore>,
    owner: Identity,
}

impl MaintenanceGuard {
    /// Create the guard.
    pub fn new(store: Arc<StateStore>, owner: Identity) -> Self {
        Self { store, owner }
    }
}

#[async_trait]
impl Guard for MaintenanceGuard {
    fn kind(&self) -> GuardKind {
        GuardKind::Maintenance
    }

    #[instrument(skip(self, event), fields(chat = %event.chat), level = "debug")]
    async fn evaluate(&self, event: &GuardEvent) -> GuardVerdict {
        if event.is_privileged || !self.store.get_maintenance().await {
            return GuardVerdict::Allow;
        }
        debug!("Maintenance mode on, blocking");
        GuardVerdict::Block(maintenance_notice(event.mention(), self.owner))
    }
}
