//! Inbound event routing.

use crate::{AdminCommand, ModerationContext};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, instrument};
use warden_core::{GuardEvent, InboundEvent, IncomingMessage, JoinRequest};
use warden_security::{ChainOutcome, GuardKind, OutboundGate};

/// Bot logic that runs after moderation let a message through.
///
/// Replies must go through the provided gate.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Handle a message that passed every guard.
    async fn handle(&self, message: &IncomingMessage, gate: &OutboundGate);
}

/// What the router did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Join request stored for a request channel
    JoinRequestRecorded,
    /// Event not relevant to moderation
    Ignored,
    /// Owner command executed
    AdminCommand,
    /// A guard stopped the message
    Halted {
        /// The guard that blocked
        guard: GuardKind,
    },
    /// Message passed on to the bot's handler
    Handled,
}

/// Routes inbound events through moderation to the bot's handler.
pub struct EventRouter {
    context: Arc<ModerationContext>,
    handler: Arc<dyn MessageHandler>,
}

impl EventRouter {
    /// Create a router.
    pub fn new(context: Arc<ModerationContext>, handler: Arc<dyn MessageHandler>) -> Self {
        Self { context, handler }
    }

    /// Shared moderation context.
    pub fn context(&self) -> &Arc<ModerationContext> {
        &self.context
    }

    /// Process one event to completion.
    pub async fn dispatch(&self, event: InboundEvent) -> RouteOutcome {
        match event {
            InboundEvent::JoinRequest(request) => self.join_request(request).await,
            InboundEvent::Message(message) => self.message(message).await,
        }
    }

    #[instrument(skip(self, request), fields(user = %request.user.id, chat = %request.chat))]
    async fn join_request(&self, request: JoinRequest) -> RouteOutcome {
        if !self.context.force_subscribe().is_request_channel(request.chat) {
            debug!("Join request for unmonitored chat");
            return RouteOutcome::Ignored;
        }
        self.context
            .store()
            .add_join_request(request.user.id, request.chat)
            .await;
        RouteOutcome::JoinRequestRecorded
    }

    #[instrument(skip(self, message), fields(chat = %message.chat, message_id = %message.message_id))]
    async fn message(&self, message: IncomingMessage) -> RouteOutcome {
        let owner = *self.context.owner();
        if let Some(sender) = &message.sender {
            self.context
                .store()
                .add_or_update_user(sender.id, &sender.display_name)
                .await;
        }

        let command = message
            .text
            .as_deref()
            .filter(|text| AdminCommand::is_admin_command(text));
        let event = GuardEvent::from_message(&message, owner);

        if event.is_privileged
            && let (Some(text), Some(issuer)) = (command, event.sender_id())
        {
            self.context
                .commands()
                .handle(issuer, message.chat, text)
                .await;
            return RouteOutcome::AdminCommand;
        }

        if let ChainOutcome::Halted { guard } = self.context.chain().run(&event).await {
            return RouteOutcome::Halted { guard };
        }

        if let (Some(text), Some(issuer)) = (command, event.sender_id()) {
            // Non-owner admin commands are logged and dropped.
            self.context
                .commands()
                .handle(issuer, message.chat, text)
                .await;
            return RouteOutcome::Ignored;
        }

        self.handler.handle(&message, self.context.gate()).await;
        RouteOutcome::Handled
    }

    /// Consume events until the channel closes, one task per event.
    ///
    /// Returns once every spawned task has finished.
    pub async fn run(self: Arc<Self>, mut events: mpsc::Receiver<InboundEvent>) {
        let mut tasks = JoinSet::new();
        while let Some(event) = events.recv().await {
            let router = self.clone();
            tasks.spawn(async move { router.dispatch(event).await });
            while let Some(done) = tasks.try_join_next() {
                log_task_result(done);
            }
        }
        while let Some(done) = tasks.join_next().await {
            log_task_result(done);
        }
        debug!("Event channel closed");
    }
}

fn log_task_result(result: Result<RouteOutcome, tokio::task::JoinError>) {
    match result {
        Ok(outcome) => debug!(?outcome, "Event processed"),
        Err(e) => error!(error = %e, "Event task failed"),
    }
}
