//! Service wiring.

use crate::WardenConfig;
use std::sync::Arc;
use warden_database::StateStore;
use warden_interface::ChatTransport;
use warden_social::ModerationContext;
use warden_storage::DocumentBackend;

/// Build the moderation context for a configuration.
///
/// Installs the join-request TTL on the backend; a backend that rejects it is
/// logged and otherwise tolerated.
#[tracing::instrument(skip_all, fields(owner = %config.owner_id()))]
pub async fn build_context(
    config: &WardenConfig,
    backend: Arc<dyn DocumentBackend>,
    transport: Arc<dyn ChatTransport>,
) -> Arc<ModerationContext> {
    let store = Arc::new(StateStore::new(backend, config.cache().clone()));
    store
        .initialize(config.force_subscribe().join_request_ttl())
        .await;

    tracing::info!("Moderation context ready");
    Arc::new(ModerationContext::new(
        store,
        transport,
        *config.owner_id(),
        config.force_subscribe().clone(),
    ))
}
