//! Tests for the in-memory document backend.

use chrono::Utc;
use serde_json::json;
use std::time::Duration;
use warden_storage::{DocumentBackend, DocumentUpdate, InMemoryBackend, StorageErrorKind, timestamp};

#[tokio::test]
async fn test_upsert_and_find() {
    let backend = InMemoryBackend::new();
    let doc = backend
        .upsert("banned_users", "5", DocumentUpdate::new().set("id", 5).set("reason", "spam"))
        .await
        .unwrap();
    assert_eq!(doc["reason"], json!("spam"));

    let found = backend.find_one("banned_users", "5").await.unwrap().unwrap();
    assert_eq!(found["id"], json!(5));
    assert!(backend.find_one("banned_users", "6").await.unwrap().is_none());
    assert!(backend.find_one("missing", "5").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_preserves_insertion_order() {
    let backend = InMemoryBackend::new();
    for id in [30, 10, 20] {
        backend
            .upsert("users", &id.to_string(), DocumentUpdate::new().set("user_id", id))
            .await
            .unwrap();
    }
    // Updating an existing document keeps its position.
    backend
        .upsert("users", "30", DocumentUpdate::new().set("name", "x"))
        .await
        .unwrap();

    let ids: Vec<i64> = backend
        .find_all("users")
        .await
        .unwrap()
        .iter()
        .map(|doc| doc["user_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[tokio::test]
async fn test_update_existing_does_not_insert() {
    let backend = InMemoryBackend::new();
    let updated = backend
        .update_existing("users", "1", DocumentUpdate::new().set("session", "s"))
        .await
        .unwrap();
    assert!(!updated);
    assert_eq!(backend.len("users").await, 0);
}

#[tokio::test]
async fn test_delete_one_reports_existence() {
    let backend = InMemoryBackend::new();
    backend
        .upsert("c", "k", DocumentUpdate::new().set("a", 1))
        .await
        .unwrap();
    assert!(backend.delete_one("c", "k").await.unwrap());
    assert!(!backend.delete_one("c", "k").await.unwrap());
}

#[tokio::test]
async fn test_drop_collection() {
    let backend = InMemoryBackend::new();
    backend
        .upsert("join_requests", "1", DocumentUpdate::new().set("user_id", 1))
        .await
        .unwrap();
    backend.drop_collection("join_requests").await.unwrap();
    assert_eq!(backend.len("join_requests").await, 0);
    // Dropping an unknown collection is a no-op.
    backend.drop_collection("nothing").await.unwrap();
}

#[tokio::test]
async fn test_ttl_eviction() {
    let backend = InMemoryBackend::new();
    backend
        .ensure_ttl_index("join_requests", "created_at", Duration::from_millis(50))
        .await
        .unwrap();
    backend
        .upsert(
            "join_requests",
            "1",
            DocumentUpdate::new().set_on_insert("created_at", timestamp(Utc::now())),
        )
        .await
        .unwrap();
    backend
        .upsert("join_requests", "2", DocumentUpdate::new().set("user_id", 2))
        .await
        .unwrap();
    assert_eq!(backend.len("join_requests").await, 2);

    tokio::time::sleep(Duration::from_millis(120)).await;

    assert!(backend.find_one("join_requests", "1").await.unwrap().is_none());
    // Documents without the timestamp field never expire.
    assert!(backend.find_one("join_requests", "2").await.unwrap().is_some());
}

#[tokio::test]
async fn test_ttl_survives_drop() {
    let backend = InMemoryBackend::new();
    backend
        .ensure_ttl_index("join_requests", "created_at", Duration::from_millis(50))
        .await
        .unwrap();
    backend.drop_collection("join_requests").await.unwrap();
    backend
        .upsert(
            "join_requests",
            "1",
            DocumentUpdate::new().set_on_insert("created_at", timestamp(Utc::now())),
        )
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(backend.len("join_requests").await, 0);
}

#[tokio::test]
async fn test_unavailable_backend_fails() {
    let backend = InMemoryBackend::new();
    backend.set_unavailable(true);
    let err = backend.find_one("c", "k").await.unwrap_err();
    assert!(matches!(err.kind, StorageErrorKind::Unavailable(_)));

    backend.set_unavailable(false);
    assert!(backend.find_one("c", "k").await.is_ok());
}

#[tokio::test]
async fn test_empty_key_is_malformed() {
    let backend = InMemoryBackend::new();
    let err = backend
        .upsert("c", " ", DocumentUpdate::new().set("a", 1))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, StorageErrorKind::Malformed(_)));
}
