//! Tests for the recording transport.

use warden_core::{Identity, MessageId, OutboundMessage};
use warden_interface::{ChatTransport, InviteLinkRequest, MemberStatus, RecordingTransport};

const CHANNEL: Identity = Identity::new(-1001);
const USER: Identity = Identity::new(7);

#[tokio::test]
async fn test_membership_lookup() {
    let transport = RecordingTransport::new("bot");
    transport.add_member(CHANNEL, USER, MemberStatus::Member).await;

    let member = transport.get_chat_member(CHANNEL, USER).await.unwrap();
    assert!(member.is_member());

    let err = transport
        .get_chat_member(CHANNEL, Identity::new(8))
        .await
        .unwrap_err();
    assert!(err.is_not_participant());
    assert_eq!(transport.member_lookups().await.len(), 2);
}

#[tokio::test]
async fn test_left_member_is_not_member() {
    let transport = RecordingTransport::new("bot");
    transport.add_member(CHANNEL, USER, MemberStatus::Left).await;
    let member = transport.get_chat_member(CHANNEL, USER).await.unwrap();
    assert!(!member.is_member());
}

#[tokio::test]
async fn test_admin_missing() {
    let transport = RecordingTransport::new("bot");
    transport.deny_admin(CHANNEL).await;

    let err = transport.get_chat_member(CHANNEL, USER).await.unwrap_err();
    assert!(err.is_admin_required());

    let err = transport
        .create_invite_link(CHANNEL, InviteLinkRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_admin_required());
    assert!(transport.invites().await.is_empty());
}

#[tokio::test]
async fn test_invite_link_modes() {
    let transport = RecordingTransport::new("bot");
    let join = transport
        .create_invite_link(CHANNEL, InviteLinkRequest::default())
        .await
        .unwrap();
    let request = transport
        .create_invite_link(
            CHANNEL,
            InviteLinkRequest {
                expire_at: None,
                creates_join_request: true,
            },
        )
        .await
        .unwrap();
    assert!(join.contains("join"));
    assert!(request.contains("request"));
    assert_ne!(join, request);
}

#[tokio::test]
async fn test_blocked_destination_and_failed_delete() {
    let transport = RecordingTransport::new("bot");
    transport.block(USER).await;
    transport.fail_deletes().await;

    assert!(transport.send(USER, OutboundMessage::plain("x")).await.is_err());
    assert!(transport.delete_message(USER, MessageId(1)).await.is_err());
    assert!(transport.sent().await.is_empty());
    assert!(transport.deleted().await.is_empty());
}

#[tokio::test]
async fn test_message_ids_increase() {
    let transport = RecordingTransport::new("bot");
    let first = transport.send(USER, OutboundMessage::plain("a")).await.unwrap();
    let second = transport.send(USER, OutboundMessage::plain("b")).await.unwrap();
    assert!(second > first);
    assert_eq!(transport.bot_username().await.unwrap(), "bot");
}
