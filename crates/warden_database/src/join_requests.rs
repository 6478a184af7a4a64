//! Join-request records.

use crate::{JOIN_REQUESTS, StateStore};
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use warden_core::{Identity, JoinRequestRecord};
use warden_storage::{DocumentUpdate, decode, timestamp};

impl StateStore {
    /// Record that a user asked to join a channel.
    ///
    /// The creation timestamp is written once, so the TTL counts from the
    /// first request. Recording the same channel twice is a no-op.
    #[instrument(skip(self), fields(user = %user, channel = %channel))]
    pub async fn add_join_request(&self, user: Identity, channel: Identity) -> bool {
        let update = DocumentUpdate::new()
            .set("user_id", user.get())
            .add_to_set("channels", channel.get())
            .set_on_insert("created_at", timestamp(Utc::now()));
        match self.backend.upsert(JOIN_REQUESTS, &user.key(), update).await {
            Ok(_) => {
                debug!("Join request recorded");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to record join request");
                false
            }
        }
    }

    /// Whether the user has a live join request for the channel.
    #[instrument(skip(self), fields(user = %user, channel = %channel), level = "debug")]
    pub async fn has_joined_channel(&self, user: Identity, channel: Identity) -> bool {
        match self.backend.find_one(JOIN_REQUESTS, &user.key()).await {
            Ok(document) => document
                .and_then(|doc| doc.get("channels").and_then(Value::as_array).cloned())
                .is_some_and(|channels| channels.contains(&Value::from(channel.get()))),
            Err(e) => {
                warn!(error = %e, "Failed to read join requests");
                false
            }
        }
    }

    /// The user's join-request record, if live.
    pub async fn join_request(&self, user: Identity) -> Option<JoinRequestRecord> {
        match self.backend.find_one(JOIN_REQUESTS, &user.key()).await {
            Ok(document) => document.and_then(|doc| match decode(doc) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(%user, error = %e, "Malformed join-request record");
                    None
                }
            }),
            Err(e) => {
                warn!(%user, error = %e, "Failed to read join requests");
                None
            }
        }
    }

    /// Drop every join-request record.
    #[instrument(skip(self))]
    pub async fn purge_join_requests(&self) -> bool {
        match self.backend.drop_collection(JOIN_REQUESTS).await {
            Ok(()) => {
                info!("Join-request records purged");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to purge join requests");
                false
            }
        }
    }
}
