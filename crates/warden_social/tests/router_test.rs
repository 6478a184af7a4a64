//! Event routing through moderation.

mod common;

use common::{harness, message, owner_says};
use std::sync::Arc;
use warden_core::{ForceSubscribeConfig, Identity, InboundEvent, JoinRequest, Sender};
use warden_security::GuardKind;
use warden_social::RouteOutcome;

fn request_channels(ids: &[i64]) -> ForceSubscribeConfig {
    ForceSubscribeConfig::builder()
        .request_channels(ids.iter().copied().map(Identity::new).collect())
        .build()
}

fn join_request(user: i64, chat: i64) -> InboundEvent {
    InboundEvent::JoinRequest(JoinRequest {
        user: Sender::new(Identity::new(user), "Ada"),
        chat: Identity::new(chat),
    })
}

#[tokio::test]
async fn test_clean_message_reaches_handler() {
    let h = harness(ForceSubscribeConfig::default());

    let outcome = h.router.dispatch(message(5, 5, "hello")).await;

    assert_eq!(outcome, RouteOutcome::Handled);
    let sent = h.transport.sent_to(Identity::new(5)).await;
    assert_eq!(sent[0].message.text().as_deref(), Some("echo: hello"));
}

#[tokio::test]
async fn test_contact_is_recorded_before_guards() {
    let h = harness(ForceSubscribeConfig::default());
    h.store.set_maintenance(true).await;

    let outcome = h.router.dispatch(message(5, 5, "hello")).await;

    assert_eq!(
        outcome,
        RouteOutcome::Halted {
            guard: GuardKind::Maintenance
        }
    );
    assert_eq!(h.store.get_user(Identity::new(5)).await.unwrap().name, "user5");
    assert!(h.handler.seen.lock().await.is_empty());
}

#[tokio::test]
async fn test_banned_sender_never_reaches_handler() {
    let h = harness(ForceSubscribeConfig::default());
    h.store.ban(Identity::new(5), Some("spam".into())).await;

    let outcome = h.router.dispatch(message(5, 5, "hello")).await;

    assert_eq!(outcome, RouteOutcome::Halted { guard: GuardKind::Ban });
    assert!(h.handler.seen.lock().await.is_empty());
    assert_eq!(h.transport.sent_to(Identity::new(5)).await.len(), 1);
}

#[tokio::test]
async fn test_join_request_intake() {
    let h = harness(request_channels(&[-300]));

    assert_eq!(
        h.router.dispatch(join_request(5, -300)).await,
        RouteOutcome::JoinRequestRecorded
    );
    assert_eq!(
        h.router.dispatch(join_request(5, -999)).await,
        RouteOutcome::Ignored
    );

    assert!(h.store.has_joined_channel(Identity::new(5), Identity::new(-300)).await);
    assert!(!h.store.has_joined_channel(Identity::new(5), Identity::new(-999)).await);
}

#[tokio::test]
async fn test_request_channel_unlocks_after_join_request() {
    let h = harness(request_channels(&[-300]));

    assert_eq!(
        h.router.dispatch(message(5, 5, "hi")).await,
        RouteOutcome::Halted {
            guard: GuardKind::Subscription
        }
    );

    h.router.dispatch(join_request(5, -300)).await;
    assert_eq!(
        h.router.dispatch(message(5, 5, "hi")).await,
        RouteOutcome::Handled
    );
}

#[tokio::test]
async fn test_owner_bypasses_maintenance() {
    let h = harness(ForceSubscribeConfig::default());
    h.store.set_maintenance(true).await;

    assert_eq!(
        h.router.dispatch(owner_says("status?")).await,
        RouteOutcome::Handled
    );
    assert_eq!(
        h.router.dispatch(owner_says("/maintenance off")).await,
        RouteOutcome::AdminCommand
    );
    assert!(!h.store.get_maintenance().await);
}

#[tokio::test]
async fn test_run_processes_every_event() {
    let h = harness(ForceSubscribeConfig::default());
    let (tx, rx) = tokio::sync::mpsc::channel(8);

    let worker = tokio::spawn(Arc::clone(&h.router).run(rx));
    for user in 1..=5 {
        tx.send(message(user, user, "ping")).await.unwrap();
    }
    drop(tx);
    worker.await.unwrap();

    assert_eq!(h.handler.seen.lock().await.len(), 5);
    assert_eq!(h.transport.sent().await.len(), 5);
}

#[tokio::test]
async fn test_plain_text_starting_with_command_word_reaches_handler() {
    let h = harness(ForceSubscribeConfig::default());

    assert_eq!(
        h.router
            .dispatch(message(5, 5, "banned from the other group, help"))
            .await,
        RouteOutcome::Handled
    );
    assert_eq!(
        h.router
            .dispatch(owner_says("maintenance window is tonight"))
            .await,
        RouteOutcome::Handled
    );

    assert_eq!(h.handler.seen.lock().await.len(), 2);
    assert!(!h.store.get_maintenance().await);
    let owner_replies = h.transport.sent_to(common::OWNER).await;
    assert_eq!(
        owner_replies[0].message.text().as_deref(),
        Some("echo: maintenance window is tonight")
    );
}
