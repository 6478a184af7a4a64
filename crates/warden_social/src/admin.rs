//! Admin command execution.

use crate::AdminCommand;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use warden_core::{BanList, Identity, OutboundMessage};
use warden_database::StateStore;
use warden_error::CommandErrorKind;
use warden_security::{OutboundGate, UNBAN_TEXT, ban_notice};

/// Longest ban listing, in characters, sent as a plain message.
pub const INLINE_LIST_LIMIT: usize = 4000;
/// File name of the ban listing when it is sent as a document.
pub const BANNED_LIST_FILE: &str = "banned_list.txt";

/// Reply to an admin command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminReply {
    /// Plain text reply
    Text(String),
    /// Text file attachment
    Document {
        /// Attachment file name
        file_name: String,
        /// File contents
        contents: String,
    },
}

impl AdminReply {
    /// Reply text, or the file contents for documents.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Document { contents, .. } => contents,
        }
    }

    /// Outbound message carrying this reply.
    pub fn to_message(&self) -> OutboundMessage {
        match self {
            Self::Text(text) => OutboundMessage::plain(text.clone()),
            Self::Document {
                file_name,
                contents,
            } => OutboundMessage::document(file_name.clone(), contents.clone().into_bytes()),
        }
    }
}

/// Executes admin commands on behalf of the configured owner.
#[derive(Debug, Clone)]
pub struct AdminCommands {
    store: Arc<StateStore>,
    gate: Arc<OutboundGate>,
    owner: Identity,
}

impl AdminCommands {
    /// Create the command surface.
    pub fn new(store: Arc<StateStore>, gate: Arc<OutboundGate>, owner: Identity) -> Self {
        Self { store, gate, owner }
    }

    /// Parse and run a command line, replying in `chat`.
    ///
    /// Commands from anyone but the owner are ignored and produce no reply.
    /// Malformed commands produce a usage or error reply without touching
    /// state.
    #[instrument(skip(self, text), fields(issuer = %issuer, chat = %chat))]
    pub async fn handle(&self, issuer: Identity, chat: Identity, text: &str) -> Option<AdminReply> {
        if issuer != self.owner {
            warn!("Ignoring admin command from non-owner");
            return None;
        }

        let reply = match AdminCommand::parse(text) {
            Ok(command) => self.execute(command).await,
            Err(e) => {
                debug!(error = %e, "Rejected admin command");
                AdminReply::Text(render_error(e.kind()))
            }
        };
        self.gate.send(chat, reply.to_message()).await;
        Some(reply)
    }

    /// Run a parsed command and build the reply.
    #[instrument(skip(self), fields(command = %command))]
    pub async fn execute(&self, command: AdminCommand) -> AdminReply {
        match command {
            AdminCommand::Ban { target, reason } => self.ban(target, reason).await,
            AdminCommand::Unban { target } => self.unban(target).await,
            AdminCommand::ListBanned => banned_listing(&self.store.list_banned().await),
            AdminCommand::Maintenance(enabled) => self.maintenance(enabled).await,
            AdminCommand::PurgeJoinRequests => {
                if self.store.purge_join_requests().await {
                    AdminReply::Text("⚙ Successfully join request cache deleted.".into())
                } else {
                    AdminReply::Text("❌ Failed to delete join request cache.".into())
                }
            }
        }
    }

    async fn ban(&self, target: Identity, reason: Option<String>) -> AdminReply {
        if !self.store.ban(target, reason.clone()).await {
            return AdminReply::Text(format!("❌ Failed to ban `{target}`."));
        }
        info!(%target, "Ban issued");
        // The target is banned now, so the gate delivers exactly the ban notice.
        let notice = ban_notice(reason.as_deref(), self.owner);
        self.gate.send(target, notice.to_message()).await;
        AdminReply::Text(format!("✅ `{target}` banned."))
    }

    async fn unban(&self, target: Identity) -> AdminReply {
        if !self.store.unban(target).await {
            return AdminReply::Text("❌ ID was not banned.".into());
        }
        info!(%target, "Ban lifted");
        self.gate
            .send(target, OutboundMessage::plain(UNBAN_TEXT))
            .await;
        AdminReply::Text(format!("✅ `{target}` unbanned."))
    }

    async fn maintenance(&self, enabled: bool) -> AdminReply {
        let state = if enabled { "enabled" } else { "disabled" };
        if self.store.get_maintenance().await == enabled {
            return AdminReply::Text(format!("⚠️ Maintenance mode is already {state}."));
        }
        if !self.store.set_maintenance(enabled).await {
            return AdminReply::Text("❌ Failed to update maintenance mode.".into());
        }
        if enabled {
            AdminReply::Text("✅ Maintenance mode enabled.".into())
        } else {
            AdminReply::Text("❌ Maintenance mode disabled.".into())
        }
    }
}

fn render_error(kind: &CommandErrorKind) -> String {
    match kind {
        CommandErrorKind::InvalidIdentity(_) => "Invalid ID.".to_string(),
        CommandErrorKind::InvalidToggle(_) => "Invalid status. Use 'on' or 'off'.".to_string(),
        other => other.to_string(),
    }
}

/// Ban listing, users first; a document once it outgrows one message.
fn banned_listing(list: &BanList) -> AdminReply {
    if list.is_empty() {
        return AdminReply::Text("No users or channels are currently banned.".into());
    }
    let mut text = String::from("🚫 Banned List:\n\n");
    for record in list.iter() {
        text.push_str(&format!(
            "{} — {}\n",
            record.identity,
            record.reason.as_deref().unwrap_or("No reason")
        ));
    }
    if text.chars().count() <= INLINE_LIST_LIMIT {
        AdminReply::Text(text)
    } else {
        AdminReply::Document {
            file_name: BANNED_LIST_FILE.to_string(),
            contents: text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::BanRecord;

    #[test]
    fn test_listing_format() {
        let list = BanList {
            users: vec![BanRecord::new(Identity::new(7), Some("spam".into()))],
            channels: vec![BanRecord::new(Identity::new(-3), None)],
        };
        assert_eq!(
            banned_listing(&list),
            AdminReply::Text("🚫 Banned List:\n\n7 — spam\n-3 — No reason\n".into())
        );
    }

    #[test]
    fn test_error_rendering() {
        assert_eq!(
            render_error(&CommandErrorKind::Usage("/unban user_id or channel_id")),
            "Usage: /unban user_id or channel_id"
        );
        assert_eq!(
            render_error(&CommandErrorKind::InvalidIdentity("x".into())),
            "Invalid ID."
        );
    }
}
