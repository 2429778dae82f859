//! Record registration and listing integration tests.
//!
//! Run with: `cargo test -p clipstore-api --test videos_test`.

mod helpers;

use helpers::{api_path, setup_test_app, token_for, TestApp};
use uuid::Uuid;

fn register_body(storage_key: &str) -> serde_json::Value {
    serde_json::json!({
        "storageKey": storage_key,
        "filename": "clip.mp4",
        "contentType": "video/mp4",
        "sizeBytes": 1_048_576
    })
}

/// Presign an upload, mark the object present in the fake storage, and return
/// the storage key. This is the direct-upload flow up to (not including)
/// record registration.
async fn complete_upload(app: &TestApp, user: Uuid, filename: &str) -> String {
    let response = app
        .client()
        .post(&api_path("/videos/uploads/presign"))
        .add_header("Authorization", format!("Bearer {}", token_for(user)))
        .json(&serde_json::json!({
            "filename": filename,
            "contentType": "video/mp4",
            "sizeBytes": 1_048_576
        }))
        .await;
    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    let storage_key = data["storageKey"].as_str().expect("storageKey").to_string();
    app.storage.put_object(&storage_key);
    storage_key
}

#[tokio::test]
async fn test_register_after_completed_upload() {
    let app = setup_test_app();
    let user = Uuid::new_v4();
    let storage_key = complete_upload(&app, user, "clip.mp4").await;

    let response = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", format!("Bearer {}", token_for(user)))
        .json(&register_body(&storage_key))
        .await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["storageKey"].as_str(), Some(storage_key.as_str()));
    assert_eq!(data["status"].as_str(), Some("uploaded"));
    assert!(data["id"].as_str().is_some());
}

#[tokio::test]
async fn test_register_rejects_key_outside_caller_namespace() {
    let app = setup_test_app();
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    let storage_key = complete_upload(&app, owner, "clip.mp4").await;

    let response = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", format!("Bearer {}", token_for(intruder)))
        .json(&register_body(&storage_key))
        .await;

    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn test_register_rejects_missing_object() {
    let app = setup_test_app();
    let user = Uuid::new_v4();

    // Key is in the caller's namespace but no upload ever happened.
    let storage_key = format!("users/{}/1-abcdefghijkl-clip.mp4", user);

    let response = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", format!("Bearer {}", token_for(user)))
        .json(&register_body(&storage_key))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_register_rejects_duplicate_key() {
    let app = setup_test_app();
    let user = Uuid::new_v4();
    let storage_key = complete_upload(&app, user, "clip.mp4").await;

    let first = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", format!("Bearer {}", token_for(user)))
        .json(&register_body(&storage_key))
        .await;
    assert_eq!(first.status_code(), 200);

    let second = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", format!("Bearer {}", token_for(user)))
        .json(&register_body(&storage_key))
        .await;
    assert_eq!(second.status_code(), 400);
}

#[tokio::test]
async fn test_list_returns_only_callers_videos_newest_first() {
    let app = setup_test_app();
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();

    for (owner, filename) in [(user, "first.mp4"), (user, "second.mp4"), (other, "theirs.mp4")] {
        let storage_key = complete_upload(&app, owner, filename).await;
        let response = app
            .client()
            .post(&api_path("/videos"))
            .add_header("Authorization", format!("Bearer {}", token_for(owner)))
            .json(&serde_json::json!({
                "storageKey": storage_key,
                "filename": filename,
                "contentType": "video/mp4",
                "sizeBytes": 1_048_576
            }))
            .await;
        assert_eq!(response.status_code(), 200);
    }

    let response = app
        .client()
        .get(&api_path("/videos"))
        .add_header("Authorization", format!("Bearer {}", token_for(user)))
        .await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    let videos = data.as_array().expect("array response");
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0]["filename"].as_str(), Some("second.mp4"));
    assert_eq!(videos[1]["filename"].as_str(), Some("first.mp4"));
}

#[tokio::test]
async fn test_list_requires_session() {
    let app = setup_test_app();

    let response = app.client().get(&api_path("/videos")).await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = setup_test_app();

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["status"].as_str(), Some("ok"));
}
