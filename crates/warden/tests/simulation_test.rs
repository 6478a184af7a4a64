//! End-to-end pipeline runs over in-memory state.

use std::io::Cursor;
use warden::{
    Identity, RecordingTransport, SentMessage, WardenConfig, parse_events, simulate,
};

const OWNER: i64 = 1000;

fn config(extra: &str) -> WardenConfig {
    WardenConfig::from_toml_str(&format!("owner_id = {OWNER}\n{extra}")).unwrap()
}

fn texts_to(sent: &[SentMessage], destination: i64) -> Vec<String> {
    sent.iter()
        .filter(|s| s.destination == Identity::new(destination))
        .filter_map(|s| s.message.text().clone())
        .collect()
}

#[test]
fn test_parse_events_skips_blanks_and_comments() {
    let input = r#"
# a join request, then a message
{"type": "join_request", "user": {"id": 5, "display_name": "Ada"}, "chat": -300}

{"type": "message", "message_id": 1, "chat": 5, "sender": {"id": 5, "display_name": "Ada"}, "text": "hi"}
"#;
    let events = parse_events(Cursor::new(input)).unwrap();
    assert_eq!(events.len(), 2);
}

#[test]
fn test_parse_events_reports_line() {
    let input = "{\"type\": \"message\"}\n";
    let err = parse_events(Cursor::new(input)).unwrap_err();
    assert!(err.to_string().contains("line 1"));
}

#[tokio::test]
async fn test_ban_then_message_is_blocked() {
    let events = parse_events(Cursor::new(format!(
        r#"{{"type": "message", "message_id": 1, "chat": {OWNER}, "sender": {{"id": {OWNER}, "display_name": "Owner"}}, "text": "/ban 5 spam"}}
{{"type": "message", "message_id": 2, "chat": 5, "sender": {{"id": 5, "display_name": "Ada"}}, "text": "hello"}}
{{"type": "message", "message_id": 3, "chat": 6, "sender": {{"id": 6, "display_name": "Bob"}}, "text": "hello"}}
"#
    )))
    .unwrap();

    let sent = simulate(&config(""), events, RecordingTransport::new("warden_bot")).await;

    assert_eq!(texts_to(&sent, OWNER), vec!["✅ `5` banned."]);
    let to_banned = texts_to(&sent, 5);
    assert_eq!(to_banned.len(), 2, "notice on ban and on the blocked message");
    assert!(to_banned.iter().all(|t| t.ends_with("Reason: spam")));
    assert_eq!(texts_to(&sent, 6), vec!["hello"]);
}

#[tokio::test]
async fn test_join_request_satisfies_force_subscribe() {
    let events = parse_events(Cursor::new(
        r#"{"type": "message", "message_id": 1, "chat": 5, "sender": {"id": 5, "display_name": "Ada"}, "text": "first"}
{"type": "join_request", "user": {"id": 5, "display_name": "Ada"}, "chat": -300}
{"type": "message", "message_id": 2, "chat": 5, "sender": {"id": 5, "display_name": "Ada"}, "text": "second"}
"#,
    ))
    .unwrap();

    let sent = simulate(
        &config("[force_subscribe]\nrequest_channels = [-300]"),
        events,
        RecordingTransport::new("warden_bot"),
    )
    .await;

    let texts = texts_to(&sent, 5);
    assert_eq!(texts.len(), 2);
    assert!(texts[0].starts_with("Ada, You haven't joined my channel yet."));
    assert_eq!(texts[1], "second");

    let keyboard = sent[0].message.keyboard().clone().unwrap();
    assert_eq!(keyboard.rows.len(), 2);
}
